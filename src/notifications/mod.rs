// SPDX-License-Identifier: MPL-2.0
//! Notification system for a visual page editor.
//!
//! Notifications are short messages shown to the user (save succeeded, a
//! component failed validation, ...). They can point at a component of the
//! edited document and reveal it on demand.
//!
//! # Components
//!
//! - [`notification`] - `Notification` handle, `Severity` and build options
//! - [`manager`] - `NotificationManager` for ordering and lifecycle
//! - [`editor`] - `Editor` trait implemented by the host
//! - [`events`] - bus events and host commands
//! - [`icons`] - default glyphs and override merging
//!
//! # Usage
//!
//! ```ignore
//! use editor_notifications::config::Config;
//! use editor_notifications::notifications::{NotificationManager, NotificationOptions};
//!
//! let manager = NotificationManager::new(Vec::<NotificationOptions>::new(), host, Config::default());
//! manager.add(NotificationOptions::success("Page saved"));
//! ```
//!
//! # Design Considerations
//!
//! - Single-threaded: handles are `Rc` based and timers run on the host's tokio `LocalSet`
//! - Events are emitted synchronously, in a fixed order per operation
//! - Identifiers replace rather than update existing notifications

pub mod editor;
pub mod events;
pub mod icons;
mod manager;
mod notification;

pub use editor::{ComponentId, Editor, LocatedComponent, PageId};
pub use events::{Command, NotificationEvent};
pub use icons::Icons;
pub use manager::{InitialEntry, NotificationManager, RemoveTarget, WeakNotificationManager};
pub use notification::{
    Notification, NotificationModel, NotificationOptions, RemoveCallback, Severity,
};
