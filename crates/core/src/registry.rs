// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch of notifications to the observers registered for them.
//!
//! The registry maps each notification name to the observers interested in
//! it, in registration order. Dispatch works on a snapshot of that list, so
//! an observer may register or remove observers (itself included) while it
//! is being notified.

use crate::error::ObserverError;
use crate::notification::Notification;
use crate::observer::Notifiable;
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Observers keyed by the notification name they are interested in.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RwLock<HashMap<String, Vec<Arc<dyn Notifiable>>>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer` for notifications named `name`.
    pub fn register_observer(&self, name: impl Into<String>, observer: Arc<dyn Notifiable>) {
        let name = name.into();
        let mut observers = self.observers.write();
        let list = observers.entry(name.clone()).or_default();
        list.push(observer);
        tracing::debug!(notification = %name, observers = list.len(), "registered observer");
    }

    /// Notify every observer registered for the notification's name.
    ///
    /// Returns the number of observers notified. Stops at the first
    /// observer that fails and returns its error.
    pub fn notify_observers(&self, notification: &Notification) -> Result<usize, ObserverError> {
        let snapshot = match self.observers.read().get(notification.name()) {
            Some(list) => list.clone(),
            None => return Ok(0),
        };

        for observer in &snapshot {
            tracing::trace!(notification = notification.name(), "notifying observer");
            observer.notify(notification)?;
        }
        Ok(snapshot.len())
    }

    /// Remove the first observer for `name` whose context is `context`.
    ///
    /// `context` may be the context itself or the `Arc` holding it. Returns
    /// whether an observer was removed.
    pub fn remove_observer(&self, name: &str, context: &dyn Any) -> bool {
        let mut observers = self.observers.write();
        let Some(list) = observers.get_mut(name) else {
            return false;
        };
        let Some(index) = list.iter().position(|observer| observer.has_context(context)) else {
            return false;
        };
        list.remove(index);
        let remaining = list.len();
        if remaining == 0 {
            observers.remove(name);
        }
        tracing::debug!(notification = name, observers = remaining, "removed observer");
        true
    }

    pub fn has_observers(&self, name: &str) -> bool {
        self.observers.read().contains_key(name)
    }

    pub fn observer_count(&self, name: &str) -> usize {
        self.observers.read().get(name).map_or(0, Vec::len)
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let observers = self.observers.read();
        let mut counts: Vec<_> = observers.iter().map(|(name, list)| (name.as_str(), list.len())).collect();
        counts.sort_unstable();
        f.debug_struct("ObserverRegistry").field("observers", &counts).finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
