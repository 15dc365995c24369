// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observers pairing a notify method with its execution context.
//!
//! An observer carries everything needed to call back an interested
//! object: the method to invoke and the context (owner) to invoke it on.
//! There are no getters for either. Once configured, the only things an
//! observer can do are deliver a notification and tell whether a given
//! object is its context.

use crate::error::ObserverError;
use crate::notification::Notification;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the observer's context as owner.
pub type NotifyMethod<C> = Arc<dyn Fn(&C, &Notification) + Send + Sync>;

/// A notify method bound to the context it runs on.
pub struct Observer<C> {
    notify_method: Option<NotifyMethod<C>>,
    notify_context: Option<Arc<C>>,
}

impl<C> Observer<C> {
    /// Create an observer that will call `notify_method` on `notify_context`.
    pub fn new<F>(notify_method: F, notify_context: Arc<C>) -> Self
    where
        F: Fn(&C, &Notification) + Send + Sync + 'static,
    {
        Self { notify_method: Some(Arc::new(notify_method)), notify_context: Some(notify_context) }
    }

    /// Create an observer with neither method nor context set.
    pub fn empty() -> Self {
        Self { notify_method: None, notify_context: None }
    }

    pub fn set_notify_method<F>(&mut self, notify_method: F)
    where
        F: Fn(&C, &Notification) + Send + Sync + 'static,
    {
        self.notify_method = Some(Arc::new(notify_method));
    }

    pub fn set_notify_context(&mut self, notify_context: Arc<C>) {
        self.notify_context = Some(notify_context);
    }

    /// Invoke the notify method on the context, passing `notification`.
    ///
    /// Returns once the method has returned. Fails with
    /// [`ObserverError::InvalidState`] if the method or the context is unset.
    pub fn notify_observer(&self, notification: &Notification) -> Result<(), ObserverError> {
        let Some(method) = &self.notify_method else {
            tracing::warn!(notification = notification.name(), "observer has no notify method");
            return Err(ObserverError::InvalidState("notify method"));
        };
        let Some(context) = &self.notify_context else {
            tracing::warn!(notification = notification.name(), "observer has no notify context");
            return Err(ObserverError::InvalidState("notify context"));
        };
        method(context, notification);
        Ok(())
    }

    /// True iff `candidate` is the very object stored as context.
    pub fn compare_notify_context(&self, candidate: &C) -> bool {
        self.notify_context.as_deref().is_some_and(|context| std::ptr::eq(context, candidate))
    }
}

impl<C> Default for Observer<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Clone for Observer<C> {
    fn clone(&self) -> Self {
        Self { notify_method: self.notify_method.clone(), notify_context: self.notify_context.clone() }
    }
}

impl<C> fmt::Debug for Observer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("notify_method", &self.notify_method.is_some())
            .field("notify_context", &self.notify_context.as_ref().map(Arc::as_ptr))
            .finish()
    }
}

/// Type-erased observer, as held by an [`ObserverRegistry`](crate::ObserverRegistry).
pub trait Notifiable: Send + Sync {
    /// Deliver `notification` to the observer.
    fn notify(&self, notification: &Notification) -> Result<(), ObserverError>;

    /// Identity check against a context of any type.
    ///
    /// Accepts either the context itself or the `Arc` holding it. A
    /// candidate of another type is never the context.
    fn has_context(&self, candidate: &dyn Any) -> bool;
}

impl<C: Send + Sync + 'static> Notifiable for Observer<C> {
    fn notify(&self, notification: &Notification) -> Result<(), ObserverError> {
        self.notify_observer(notification)
    }

    fn has_context(&self, candidate: &dyn Any) -> bool {
        if let Some(context) = candidate.downcast_ref::<C>() {
            return self.compare_notify_context(context);
        }
        candidate
            .downcast_ref::<Arc<C>>()
            .is_some_and(|context| self.compare_notify_context(context))
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
