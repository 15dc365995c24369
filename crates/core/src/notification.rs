// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifications passed from a sender to its observers.
//!
//! A notification is a named value carrier: a name identifying what
//! happened, an optional body with the payload, and an optional type used
//! by receivers to discriminate between variants of the same name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Immutable named value carrier delivered to observers.
///
/// Serializes with absent fields omitted:
/// - `{"name": "ObserverTestNote", "body": 10}`
/// - `{"name": "Startup", "type": "cold"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    note_type: Option<String>,
}

impl Notification {
    /// Create a notification with no body and no type.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), body: None, note_type: None }
    }

    /// Attach a body payload.
    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a type discriminator.
    pub fn with_type(mut self, note_type: impl Into<String>) -> Self {
        self.note_type = Some(note_type.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn note_type(&self) -> Option<&str> {
        self.note_type.as_deref()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Notification Name: {}", self.name)?;
        match &self.body {
            Some(body) => writeln!(f, "Body: {body}")?,
            None => writeln!(f, "Body: null")?,
        }
        write!(f, "Type: {}", self.note_type.as_deref().unwrap_or("null"))
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
