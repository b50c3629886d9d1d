// SPDX-License-Identifier: MPL-2.0
//! `editor_notifications` manages transient notifications for a web-based
//! visual page editor.
//!
//! It keeps an ordered list of notifications, dismisses them after a
//! timeout, reports every change on the host's event bus and can reveal
//! the document component a notification refers to.

pub mod config;
pub mod error;
pub mod notifications;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod test_utils;
