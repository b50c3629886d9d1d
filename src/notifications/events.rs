// SPDX-License-Identifier: MPL-2.0
//! Events emitted on the host bus and commands routed through the host's
//! command layer.

use super::manager::RemoveTarget;
use super::notification::{Notification, NotificationOptions};

/// Emitted after any change to the notification list.
pub const NOTIFICATION_CHANGED: &str = "notifications:changed";
/// Emitted after a notification was appended.
pub const NOTIFICATION_ADDED: &str = "notifications:added";
/// Emitted after a notification was spliced out.
pub const NOTIFICATION_REMOVED: &str = "notifications:removed";
/// Emitted after the list was reset.
pub const NOTIFICATION_CLEARED: &str = "notifications:cleared";

/// Command adding a notification.
pub const COMMAND_ADD: &str = "notifications:add";
/// Command removing a notification.
pub const COMMAND_REMOVE: &str = "notifications:remove";
/// Command clearing every notification.
pub const COMMAND_RESET: &str = "notifications:reset";

/// Lifecycle event with its payload.
#[derive(Debug, Clone)]
pub enum NotificationEvent {
    Added(Notification),
    Removed(Notification),
    /// Snapshot of the list after the change.
    Changed(Vec<Notification>),
    Cleared,
}

impl NotificationEvent {
    /// Returns the bus name of this event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            NotificationEvent::Added(_) => NOTIFICATION_ADDED,
            NotificationEvent::Removed(_) => NOTIFICATION_REMOVED,
            NotificationEvent::Changed(_) => NOTIFICATION_CHANGED,
            NotificationEvent::Cleared => NOTIFICATION_CLEARED,
        }
    }
}

/// A named command with its payload.
#[derive(Debug, Clone)]
pub enum Command {
    Add(NotificationOptions),
    Remove(RemoveTarget),
    Reset,
}

impl Command {
    /// Returns the registered name of this command.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => COMMAND_ADD,
            Command::Remove(_) => COMMAND_REMOVE,
            Command::Reset => COMMAND_RESET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_match_bus_names() {
        assert_eq!(NotificationEvent::Cleared.name(), "notifications:cleared");
        assert_eq!(
            NotificationEvent::Changed(Vec::new()).name(),
            "notifications:changed"
        );
    }

    #[test]
    fn command_names_match_registered_names() {
        assert_eq!(Command::Reset.name(), "notifications:reset");
        assert_eq!(
            Command::Add(NotificationOptions::info("hello")).name(),
            "notifications:add"
        );
    }
}
