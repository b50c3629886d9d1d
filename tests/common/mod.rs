// SPDX-License-Identifier: MPL-2.0
//! In-memory host editor shared by unit and integration tests.
//!
//! Also compiled into the library's unit tests, so crate items are reached
//! through the parent module's `config` and `notifications` paths.
#![allow(dead_code)]

use super::config::Config;
use super::notifications::{
    Command, ComponentId, Editor, InitialEntry, NotificationEvent, NotificationManager, PageId,
    WeakNotificationManager,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tokio::task::LocalSet;

/// Host editor stub with a small document tree.
///
/// Commands are recorded and, once a manager is attached, forwarded to it.
#[derive(Default)]
pub struct StubEditor {
    pages: RefCell<Vec<(PageId, ComponentId)>>,
    children: RefCell<HashMap<ComponentId, Vec<ComponentId>>>,
    manager: RefCell<WeakNotificationManager>,
    pub calls: RefCell<Vec<String>>,
    pub events: RefCell<Vec<NotificationEvent>>,
    pub commands: RefCell<Vec<Command>>,
    event_loop: Option<LocalSet>,
}

impl StubEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub owning a `LocalSet` for auto-dismiss timers.
    pub fn with_event_loop() -> Self {
        Self {
            event_loop: Some(LocalSet::new()),
            ..Self::default()
        }
    }

    /// Returns the stub's `LocalSet`; panics when built with [`StubEditor::new`].
    pub fn local_set(&self) -> &LocalSet {
        self.event_loop
            .as_ref()
            .expect("stub editor has no event loop")
    }

    pub fn add_page(&self, page: &str, root: &str) {
        self.pages
            .borrow_mut()
            .push((PageId::from(page), ComponentId::from(root)));
    }

    pub fn add_child(&self, parent: &str, child: &str) {
        self.children
            .borrow_mut()
            .entry(ComponentId::from(parent))
            .or_default()
            .push(ComponentId::from(child));
    }

    pub fn attach(&self, manager: &NotificationManager) {
        *self.manager.borrow_mut() = manager.downgrade();
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(NotificationEvent::name).collect()
    }
}

impl Editor for StubEditor {
    fn pages(&self) -> Vec<PageId> {
        self.pages.borrow().iter().map(|(page, _)| page.clone()).collect()
    }

    fn main_component(&self, page: &PageId) -> Option<ComponentId> {
        self.pages
            .borrow()
            .iter()
            .find(|(id, _)| id == page)
            .map(|(_, root)| root.clone())
    }

    fn children(&self, component: &ComponentId) -> Vec<ComponentId> {
        self.children
            .borrow()
            .get(component)
            .cloned()
            .unwrap_or_default()
    }

    fn select_page(&self, page: &PageId) {
        self.calls.borrow_mut().push(format!("select_page:{page}"));
    }

    fn select_component(&self, component: &ComponentId) {
        self.calls
            .borrow_mut()
            .push(format!("select_component:{component}"));
    }

    fn scroll_to(&self, component: &ComponentId) {
        self.calls.borrow_mut().push(format!("scroll_to:{component}"));
    }

    fn trigger(&self, event: NotificationEvent) {
        self.events.borrow_mut().push(event);
    }

    fn run_command(&self, command: Command) {
        self.commands.borrow_mut().push(command.clone());
        let manager = self.manager.borrow().upgrade();
        if let Some(manager) = manager {
            manager.run_command(command);
        }
    }

    fn event_loop(&self) -> Option<&LocalSet> {
        self.event_loop.as_ref()
    }
}

/// Builds a manager bound to a fresh stub editor.
pub fn setup(config: Config) -> (Rc<StubEditor>, NotificationManager) {
    setup_with(StubEditor::new(), config)
}

/// Builds a manager bound to a stub editor that runs timers.
pub fn setup_timed(config: Config) -> (Rc<StubEditor>, NotificationManager) {
    setup_with(StubEditor::with_event_loop(), config)
}

fn setup_with(editor: StubEditor, config: Config) -> (Rc<StubEditor>, NotificationManager) {
    let editor = Rc::new(editor);
    let host: Rc<dyn Editor> = editor.clone();
    let manager = NotificationManager::new(Vec::<InitialEntry>::new(), host, config);
    editor.attach(&manager);
    (editor, manager)
}
