// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for observers

use thiserror::Error;

/// Errors that can occur when notifying an observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObserverError {
    /// The observer is missing the named field and cannot be invoked.
    #[error("invalid observer state: {0} is not set")]
    InvalidState(&'static str),
}
