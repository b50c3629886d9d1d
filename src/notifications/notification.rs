// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` handle, the `Severity` enum and
//! the `NotificationOptions` used to build notifications.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

use super::editor::{all_components, ComponentId, Editor, LocatedComponent};
use super::events::Command;
use super::icons::{self, Icons};
use super::manager::RemoveTarget;

/// Severity level determines the icon and the styling applied by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    #[default]
    Info,
    /// Warning that doesn't block the user.
    Warning,
    /// Error requiring attention.
    Error,
    /// Operation completed successfully.
    Success,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Success,
    ];

    /// Returns the lowercase name, also used as icon key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidSeverity(s.to_string()))
    }
}

/// Everything needed to build a notification.
///
/// Field names follow the host editor's JSON shape (`id`, `type`,
/// `componentId`, `timeout` in milliseconds).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationOptions {
    #[serde(default, rename = "id", alias = "identifier")]
    pub identifier: Option<String>,
    pub message: String,
    #[serde(default, rename = "type", alias = "severity")]
    pub severity: Severity,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default, rename = "componentId")]
    pub component_id: Option<String>,
    #[serde(default, rename = "timeout")]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub icons: Icons,
}

impl NotificationOptions {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Parses options from raw host data.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Sets the identifier used for replace-by-identifier.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Links the notification to a component of the host document.
    #[must_use]
    pub fn with_component(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }

    /// Sets the auto-dismiss delay.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
        self
    }

    #[must_use]
    pub fn with_icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }
}

/// Compatibility handle exposing the raw construction options.
///
/// Legacy callers may keep this instead of the notification itself; the
/// manager still removes the right entry when given it.
#[derive(Debug, Clone)]
pub struct NotificationModel(Rc<NotificationOptions>);

impl NotificationModel {
    #[must_use]
    pub fn attributes(&self) -> &NotificationOptions {
        &self.0
    }

    /// Returns whether both handles belong to the same notification.
    #[must_use]
    pub fn ptr_eq(&self, other: &NotificationModel) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for NotificationModel {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Called by [`Notification::remove`] so the owner can drop the entry.
pub type RemoveCallback = Rc<dyn Fn(&Notification)>;

struct Inner {
    editor: Rc<dyn Editor>,
    identifier: Option<String>,
    message: String,
    severity: Severity,
    group: Option<String>,
    component_id: Option<ComponentId>,
    timeout: Option<Duration>,
    icons: Icons,
    model: NotificationModel,
    created_at: Instant,
    remove_callback: Option<RemoveCallback>,
    timer: RefCell<Option<JoinHandle<()>>>,
    removed: Cell<bool>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.get_mut().take() {
            timer.abort();
        }
    }
}

/// A notification to be displayed to the user.
///
/// Cloning yields another handle to the same notification; equality is
/// identity.
#[derive(Clone)]
pub struct Notification {
    inner: Rc<Inner>,
}

impl Notification {
    /// Builds a notification and arms its auto-dismiss timer.
    ///
    /// The timer runs on [`Editor::event_loop`]. When the host has none,
    /// the timeout is kept but nothing is armed.
    pub fn new(
        editor: Rc<dyn Editor>,
        options: NotificationOptions,
        remove_callback: Option<RemoveCallback>,
    ) -> Self {
        let icons = icons::resolve([&options.icons]);
        let timeout = options
            .timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        let inner = Rc::new(Inner {
            editor,
            identifier: options.identifier.clone(),
            message: options.message.clone(),
            severity: options.severity,
            group: options.group.clone(),
            component_id: options.component_id.as_deref().map(ComponentId::from),
            timeout,
            icons,
            model: NotificationModel(Rc::new(options)),
            created_at: Instant::now(),
            remove_callback,
            timer: RefCell::new(None),
            removed: Cell::new(false),
        });

        if let Some(delay) = timeout {
            match inner.editor.event_loop() {
                Some(event_loop) => {
                    let weak = Rc::downgrade(&inner);
                    let handle = event_loop.spawn_local(async move {
                        tokio::time::sleep(delay).await;
                        if let Some(inner) = weak.upgrade() {
                            let notification = Notification { inner };
                            tracing::debug!(message = %notification.message(), "notification expired");
                            notification.remove();
                        }
                    });
                    *inner.timer.borrow_mut() = Some(handle);
                }
                None => {
                    tracing::warn!(?delay, message = %inner.message, "no event loop, auto-dismiss disabled");
                }
            }
        }

        Self { inner }
    }

    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.inner.identifier.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.inner.severity
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.inner.group.as_deref()
    }

    #[must_use]
    pub fn component_id(&self) -> Option<&ComponentId> {
        self.inner.component_id.as_ref()
    }

    /// Returns the auto-dismiss delay, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    /// Returns the merged icon map.
    #[must_use]
    pub fn icons(&self) -> &Icons {
        &self.inner.icons
    }

    /// Returns the glyph for `key`, or `None` when no icon is registered.
    #[must_use]
    pub fn get_icon(&self, key: &str) -> Option<&str> {
        self.inner.icons.get(key)
    }

    /// Returns the glyph for `severity`.
    #[must_use]
    pub fn icon(&self, severity: Severity) -> Option<&str> {
        self.get_icon(severity.as_str())
    }

    /// Returns the compatibility handle of this notification.
    #[must_use]
    pub fn model(&self) -> &NotificationModel {
        &self.inner.model
    }

    /// Returns the options this notification was built from.
    #[must_use]
    pub fn options(&self) -> &NotificationOptions {
        self.inner.model.attributes()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.inner.created_at
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.inner.created_at.elapsed()
    }

    /// Returns whether this notification has been removed.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.inner.removed.get()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Notification) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Reveals the linked component in the host document.
    ///
    /// Walks every component of every page, so avoid calling it in bulk.
    /// When the component no longer exists an error notification is added
    /// through the host's command layer instead.
    pub fn select(&self) {
        let Some(target) = &self.inner.component_id else {
            return;
        };
        let editor = self.inner.editor.as_ref();

        let components = all_components(editor);
        tracing::debug!(count = components.len(), component = %target, "searching document");

        match components.into_iter().find(|located| &located.component == target) {
            Some(LocatedComponent { component, page }) => {
                // Page first, so the component is selected in its own page.
                editor.select_page(&page);
                editor.select_component(&component);
                editor.scroll_to(&component);
            }
            None => {
                tracing::error!(component = %target, "component not found");
                editor.run_command(Command::Add(NotificationOptions::error(format!(
                    "Component with ID {target} not found"
                ))));
            }
        }
    }

    /// Dismisses this notification.
    ///
    /// Only the first call has an effect. Without a removal callback the
    /// host's remove command is used instead.
    pub fn remove(&self) {
        if self.inner.removed.replace(true) {
            return;
        }
        match &self.inner.remove_callback {
            Some(callback) => callback(self),
            None => self
                .inner
                .editor
                .run_command(Command::Remove(RemoveTarget::Notification(self.clone()))),
        }
        self.cancel_timer();
    }

    /// Flags the notification as removed and stops its timer.
    pub(crate) fn mark_removed(&self) {
        self.inner.removed.set(true);
        self.cancel_timer();
    }

    fn cancel_timer(&self) {
        let timer = self.inner.timer.borrow_mut().take();
        if let Some(timer) = timer {
            timer.abort();
        }
    }
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("identifier", &self.inner.identifier)
            .field("message", &self.inner.message)
            .field("severity", &self.inner.severity)
            .field("group", &self.inner.group)
            .field("component_id", &self.inner.component_id)
            .field("timeout", &self.inner.timeout)
            .field("removed", &self.inner.removed.get())
            .finish_non_exhaustive()
    }
}
