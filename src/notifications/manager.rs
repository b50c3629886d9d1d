// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationManager` keeps notifications in insertion order, wires
//! their removal back to itself and reports every change on the host bus.

use crate::config::Config;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::editor::Editor;
use super::events::{Command, NotificationEvent};
use super::icons;
use super::notification::{Notification, NotificationModel, NotificationOptions, RemoveCallback};

/// What to remove: the notification itself or its compatibility handle.
#[derive(Debug, Clone)]
pub enum RemoveTarget {
    Notification(Notification),
    Model(NotificationModel),
}

impl RemoveTarget {
    /// Returns whether `notification` is the one designated by this target.
    #[must_use]
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            RemoveTarget::Notification(target) => target.ptr_eq(notification),
            RemoveTarget::Model(model) => model.ptr_eq(notification.model()),
        }
    }
}

impl From<Notification> for RemoveTarget {
    fn from(notification: Notification) -> Self {
        RemoveTarget::Notification(notification)
    }
}

impl From<&Notification> for RemoveTarget {
    fn from(notification: &Notification) -> Self {
        RemoveTarget::Notification(notification.clone())
    }
}

impl From<NotificationModel> for RemoveTarget {
    fn from(model: NotificationModel) -> Self {
        RemoveTarget::Model(model)
    }
}

impl From<&NotificationModel> for RemoveTarget {
    fn from(model: &NotificationModel) -> Self {
        RemoveTarget::Model(model.clone())
    }
}

/// One entry of the data a manager starts with.
#[derive(Debug, Clone)]
pub enum InitialEntry {
    /// Wrapped into a notification owned by the manager.
    Options(NotificationOptions),
    /// Kept as is.
    Existing(Notification),
    /// Raw host data. Objects with a `message` become notifications,
    /// anything else is dropped.
    Raw(serde_json::Value),
}

impl From<NotificationOptions> for InitialEntry {
    fn from(options: NotificationOptions) -> Self {
        InitialEntry::Options(options)
    }
}

impl From<Notification> for InitialEntry {
    fn from(notification: Notification) -> Self {
        InitialEntry::Existing(notification)
    }
}

impl From<serde_json::Value> for InitialEntry {
    fn from(value: serde_json::Value) -> Self {
        InitialEntry::Raw(value)
    }
}

struct ManagerInner {
    editor: Rc<dyn Editor>,
    config: Config,
    notifications: RefCell<Vec<Notification>>,
}

/// Ordered collection of notifications bound to a host editor.
///
/// Cloning yields another handle to the same manager.
#[derive(Clone)]
pub struct NotificationManager {
    inner: Rc<ManagerInner>,
}

/// Non-owning handle, for hosts that route commands back to the manager.
#[derive(Clone, Default)]
pub struct WeakNotificationManager {
    inner: Weak<ManagerInner>,
}

impl WeakNotificationManager {
    #[must_use]
    pub fn upgrade(&self) -> Option<NotificationManager> {
        self.inner
            .upgrade()
            .map(|inner| NotificationManager { inner })
    }
}

impl NotificationManager {
    /// Creates a manager populated with `initial` entries.
    ///
    /// No events are emitted for the initial population.
    pub fn new<I>(initial: I, editor: Rc<dyn Editor>, config: Config) -> Self
    where
        I: IntoIterator,
        I::Item: Into<InitialEntry>,
    {
        let inner = Rc::new_cyclic(|weak: &Weak<ManagerInner>| {
            let notifications = initial
                .into_iter()
                .filter_map(|entry| {
                    let entry: InitialEntry = entry.into();
                    match entry {
                        InitialEntry::Options(options) => {
                            Some(build(&editor, &config, weak, options))
                        }
                        InitialEntry::Existing(notification) => Some(notification),
                        InitialEntry::Raw(value) => options_from_raw(value)
                            .map(|options| build(&editor, &config, weak, options)),
                    }
                })
                .collect();
            ManagerInner {
                editor,
                config,
                notifications: RefCell::new(notifications),
            }
        });
        Self { inner }
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakNotificationManager {
        WeakNotificationManager {
            inner: Rc::downgrade(&self.inner),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Returns a snapshot of the notifications, in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Notification> {
        self.inner.notifications.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.notifications.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.notifications.borrow().is_empty()
    }

    /// Returns the notification registered under `identifier`.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<Notification> {
        self.inner
            .notifications
            .borrow()
            .iter()
            .find(|n| n.identifier() == Some(identifier))
            .cloned()
    }

    /// Appends a new notification.
    ///
    /// Every existing notification with the same identifier is removed first.
    /// Emits `added` then `changed`.
    pub fn add(&self, options: NotificationOptions) -> Notification {
        if let Some(identifier) = options.identifier.as_deref() {
            // Initial data may already hold several entries with this identifier.
            let existing: Vec<Notification> = self
                .inner
                .notifications
                .borrow()
                .iter()
                .filter(|n| n.identifier() == Some(identifier))
                .cloned()
                .collect();
            for notification in existing {
                tracing::debug!(identifier, "replacing notification");
                self.remove(&notification);
            }
        }

        let notification = build(
            &self.inner.editor,
            &self.inner.config,
            &Rc::downgrade(&self.inner),
            options,
        );
        self.inner
            .notifications
            .borrow_mut()
            .push(notification.clone());
        tracing::debug!(severity = %notification.severity(), message = %notification.message(), "notification added");

        self.emit(NotificationEvent::Added(notification.clone()));
        self.emit(NotificationEvent::Changed(self.get_all()));
        notification
    }

    /// Removes a notification.
    ///
    /// Returns `false`, without emitting anything, when the target is not
    /// managed here. Otherwise emits `removed` then `changed`.
    pub fn remove(&self, target: impl Into<RemoveTarget>) -> bool {
        let target = target.into();
        let removed = {
            let mut notifications = self.inner.notifications.borrow_mut();
            notifications
                .iter()
                .position(|n| target.matches(n))
                .map(|index| notifications.remove(index))
        };
        let Some(notification) = removed else {
            return false;
        };

        notification.mark_removed();
        tracing::debug!(message = %notification.message(), "notification removed");

        self.emit(NotificationEvent::Removed(notification));
        self.emit(NotificationEvent::Changed(self.get_all()));
        true
    }

    /// Clears all notifications. Emits `cleared` then `changed`.
    pub fn reset(&self) {
        let cleared = std::mem::take(&mut *self.inner.notifications.borrow_mut());
        for notification in &cleared {
            notification.mark_removed();
        }
        tracing::debug!(count = cleared.len(), "notifications cleared");

        self.emit(NotificationEvent::Cleared);
        self.emit(NotificationEvent::Changed(self.get_all()));
    }

    /// Executes a host command against this manager.
    pub fn run_command(&self, command: Command) {
        match command {
            Command::Add(options) => {
                self.add(options);
            }
            Command::Remove(target) => {
                self.remove(target);
            }
            Command::Reset => self.reset(),
        }
    }

    fn emit(&self, event: NotificationEvent) {
        self.inner.editor.trigger(event);
    }
}

/// Builds a notification whose removal goes through the manager.
fn build(
    editor: &Rc<dyn Editor>,
    config: &Config,
    manager: &Weak<ManagerInner>,
    mut options: NotificationOptions,
) -> Notification {
    options.icons = icons::merge(&config.icons, &options.icons);
    if let (None, Some(timeout)) = (options.timeout_ms, config.default_timeout()) {
        options = options.auto_dismiss(timeout);
    }

    let manager = manager.clone();
    let callback: RemoveCallback = Rc::new(move |notification: &Notification| {
        if let Some(inner) = manager.upgrade() {
            NotificationManager { inner }.remove(notification);
        }
    });
    Notification::new(Rc::clone(editor), options, Some(callback))
}

fn options_from_raw(value: serde_json::Value) -> Option<NotificationOptions> {
    let has_message = value
        .as_object()
        .is_some_and(|object| object.contains_key("message"));
    if !has_message {
        tracing::debug!(entry = %value, "skipping initial entry without message");
        return None;
    }
    match NotificationOptions::from_json(value) {
        Ok(options) => Some(options),
        Err(err) => {
            tracing::warn!(%err, "dropping malformed initial notification");
            None
        }
    }
}
