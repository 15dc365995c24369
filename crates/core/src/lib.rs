// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pmvc-core: Observer and notification core of the pmvc framework

pub mod error;
pub mod notification;
pub mod observer;
pub mod registry;

pub use error::ObserverError;
pub use notification::Notification;
pub use observer::{Notifiable, NotifyMethod, Observer};
pub use registry::ObserverRegistry;
