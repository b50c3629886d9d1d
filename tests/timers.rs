// SPDX-License-Identifier: MPL-2.0
mod common;

use common::{setup, setup_timed};
use editor_notifications::config::{self, Config};
use editor_notifications::notifications::{self, NotificationOptions};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn timed_notification_disappears() {
    let (editor, manager) = setup_timed(Config::default());
    editor
        .local_set()
        .run_until(async {
            let notification = manager
                .add(NotificationOptions::info("brief").auto_dismiss(Duration::from_millis(50)));
            assert_eq!(manager.len(), 1);
            editor.events.borrow_mut().clear();

            tokio::time::sleep(Duration::from_millis(60)).await;

            assert!(manager.is_empty());
            assert!(notification.is_removed());
            assert_eq!(
                editor.event_names(),
                ["notifications:removed", "notifications:changed"]
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn default_timeout_comes_from_config() {
    let config = Config {
        timeout_ms: Some(100),
        ..Config::default()
    };
    let (editor, manager) = setup_timed(config);
    editor
        .local_set()
        .run_until(async {
            let notification = manager.add(NotificationOptions::success("Saved"));
            assert_eq!(notification.timeout(), Some(Duration::from_millis(100)));

            tokio::time::sleep(Duration::from_millis(50)).await;
            assert_eq!(manager.len(), 1);

            tokio::time::sleep(Duration::from_millis(60)).await;
            assert!(manager.is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn evicted_notification_timer_is_cancelled() {
    let (editor, manager) = setup_timed(Config::default());
    editor
        .local_set()
        .run_until(async {
            manager.add(
                NotificationOptions::info("first")
                    .with_identifier("x")
                    .auto_dismiss(Duration::from_millis(50)),
            );
            let second = manager.add(NotificationOptions::info("second").with_identifier("x"));
            editor.events.borrow_mut().clear();

            tokio::time::sleep(Duration::from_millis(100)).await;

            assert_eq!(manager.len(), 1);
            assert!(manager.get_all()[0].ptr_eq(&second));
            assert!(editor.events.borrow().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn reset_cancels_pending_timers() {
    let (editor, manager) = setup_timed(Config::default());
    editor
        .local_set()
        .run_until(async {
            manager.add(NotificationOptions::info("a").auto_dismiss(Duration::from_millis(30)));
            manager.add(NotificationOptions::info("b").auto_dismiss(Duration::from_millis(40)));
            manager.reset();
            editor.events.borrow_mut().clear();

            tokio::time::sleep(Duration::from_millis(100)).await;

            assert!(editor.events.borrow().is_empty());
        })
        .await;
}

#[test]
fn configured_timeout_without_event_loop_keeps_notification() {
    let config = Config {
        timeout_ms: Some(5_000),
        ..Config::default()
    };
    let (_editor, manager) = setup(config);

    let notification = manager.add(NotificationOptions::success("Saved"));

    assert_eq!(manager.len(), 1);
    assert_eq!(notification.timeout(), Some(Duration::from_secs(5)));
    assert!(!notification.is_removed());

    notification.remove();
    assert!(manager.is_empty());
}

#[test]
fn raw_timeout_without_event_loop_keeps_notification() {
    let editor = std::rc::Rc::new(common::StubEditor::new());
    let host: std::rc::Rc<dyn notifications::Editor> = editor.clone();
    let manager = notifications::NotificationManager::new(
        vec![serde_json::json!({ "message": "Loaded", "timeout": 3000 })],
        host,
        config::Config::default(),
    );

    assert_eq!(manager.len(), 1);
    assert_eq!(manager.get_all()[0].timeout(), Some(Duration::from_secs(3)));
}
