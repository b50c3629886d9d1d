// SPDX-License-Identifier: MPL-2.0
//! Capabilities the host page editor provides to the notification system.
//!
//! The document model, selection and event bus all live in the host. The
//! notification code only talks to them through [`Editor`], so any host
//! (or a test stub) can plug in.

use std::fmt;
use tokio::task::LocalSet;

use super::events::{Command, NotificationEvent};

/// Identifier of a page in the host document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(pub String);

/// Identifier of a component in the host document tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId(pub String);

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host editor collaborator.
pub trait Editor {
    /// Lists every page of the document, in document order.
    fn pages(&self) -> Vec<PageId>;

    /// Returns the root component of `page`.
    fn main_component(&self, page: &PageId) -> Option<ComponentId>;

    /// Returns the direct children of `component`, in tree order.
    fn children(&self, component: &ComponentId) -> Vec<ComponentId>;

    fn select_page(&self, page: &PageId);

    fn select_component(&self, component: &ComponentId);

    fn scroll_to(&self, component: &ComponentId);

    /// Emits `event` on the host bus.
    fn trigger(&self, event: NotificationEvent);

    /// Executes a named command.
    fn run_command(&self, command: Command);

    /// Local task set driving auto-dismiss timers.
    ///
    /// Hosts without one get notifications that never expire on their own.
    fn event_loop(&self) -> Option<&LocalSet> {
        None
    }
}

/// A component together with the page that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedComponent {
    pub component: ComponentId,
    pub page: PageId,
}

/// Collects every component of every page.
///
/// Each page contributes its main component followed by all descendants,
/// depth-first with parents before children. This walks the whole document
/// and must stay off hot paths.
pub fn all_components(editor: &dyn Editor) -> Vec<LocatedComponent> {
    let mut found = Vec::new();
    for page in editor.pages() {
        let Some(root) = editor.main_component(&page) else {
            continue;
        };
        let mut stack = vec![root];
        while let Some(component) = stack.pop() {
            // Reverse so the first child is visited next.
            stack.extend(editor.children(&component).into_iter().rev());
            found.push(LocatedComponent {
                component,
                page: page.clone(),
            });
        }
    }
    found
}
