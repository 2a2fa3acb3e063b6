//! Toast queue integration tests, driven by a paused Tokio clock.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::sleep;

use activityhub_core::config::ToastConfig;
use activityhub_core::types::NotificationKind;
use activityhub_notify::{Toast, ToastAction, ToastOptions, ToastQueue};

fn queue() -> ToastQueue {
    ToastQueue::new(ToastConfig::default())
}

fn lasting(ms: u64) -> ToastOptions {
    ToastOptions::default().duration(Duration::from_millis(ms))
}

fn find(queue: &ToastQueue, id: &str) -> Option<Toast> {
    queue.current().into_iter().find(|t| t.id == id)
}

#[tokio::test(start_paused = true)]
async fn test_show_returns_id_of_visible_full_toast() {
    let toasts = queue();

    let id = toasts.show(
        NotificationKind::Info,
        "Guardado",
        ToastOptions::default().title("Listo"),
    );

    let toast = find(&toasts, &id).expect("toast listed");
    assert!(toast.visible);
    assert_eq!(toast.progress_percent, 100.0);
    assert_eq!(toast.title.as_deref(), Some("Listo"));
    assert_eq!(toast.duration, Duration::from_millis(4000));
    assert_eq!(toasts.active_timers(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_default_duration_follows_kind() {
    let toasts = queue();

    let success = toasts.success("a");
    let info = toasts.info("b");
    let warning = toasts.warning("c");
    let error = toasts.error("d");

    let ms = |id: &str| find(&toasts, id).map(|t| t.duration.as_millis());
    assert_eq!(ms(&success), Some(3000));
    assert_eq!(ms(&info), Some(4000));
    assert_eq!(ms(&warning), Some(5000));
    assert_eq!(ms(&error), Some(7000));
    assert_eq!(find(&toasts, &error).map(|t| t.kind), Some(NotificationKind::Error));
}

#[tokio::test(start_paused = true)]
async fn test_progress_decreases_per_tick_and_reaches_zero() {
    let toasts = queue();
    let id = toasts.show(NotificationKind::Success, "a", lasting(1000));

    // Sample halfway between ticks so a tick and a sample never coincide.
    sleep(Duration::from_millis(25)).await;
    let mut last = 100.0;
    for k in 0..20u32 {
        let toast = find(&toasts, &id).expect("toast listed");
        let expected = 100.0 - 5.0 * f64::from(k);
        assert!(
            (toast.progress_percent - expected).abs() < 1e-9,
            "tick {k}: {} != {expected}",
            toast.progress_percent
        );
        assert!(toast.progress_percent <= last);
        assert!(toast.visible);
        last = toast.progress_percent;
        sleep(Duration::from_millis(50)).await;
    }

    // t = 1025ms: expired and leaving.
    let toast = find(&toasts, &id).expect("still in exit grace");
    assert!(!toast.visible);
    assert_eq!(toast.progress_percent, 0.0);
    assert_eq!(toasts.active_timers(), 0);

    sleep(Duration::from_millis(250)).await;
    assert!(find(&toasts, &id).is_some());

    sleep(Duration::from_millis(50)).await;
    assert!(toasts.current().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_list_length_tracks_completed_removals() {
    let toasts = queue();
    let short = toasts.show(NotificationKind::Info, "short", lasting(1000));
    let long = toasts.show(NotificationKind::Info, "long", lasting(3000));
    assert_eq!(toasts.current().len(), 2);

    sleep(Duration::from_millis(1400)).await;
    let ids: Vec<String> = toasts.current().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![long.clone()]);
    assert!(find(&toasts, &short).is_none());

    sleep(Duration::from_millis(2000)).await;
    assert!(toasts.current().is_empty());
    assert_eq!(toasts.active_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_double_remove_deletes_once() {
    let toasts = queue();
    let id = toasts.show(NotificationKind::Warning, "a", lasting(5000));
    let mut rx = toasts.subscribe();

    sleep(Duration::from_millis(100)).await;
    rx.borrow_and_update();
    toasts.remove(&id);
    toasts.remove(&id);

    let toast = find(&toasts, &id).expect("in exit grace");
    assert!(!toast.visible);
    assert_eq!(toasts.active_timers(), 0);
    assert!(rx.has_changed().expect("queue alive"));
    rx.borrow_and_update();

    // A toast shown during the grace period survives the deletion.
    let other = toasts.info("b");
    rx.borrow_and_update();

    sleep(Duration::from_millis(325)).await;
    let remaining: Vec<String> = toasts.current().into_iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![other]);

    // Progress ticks only touch visible toasts; nothing else deletes the first one.
    sleep(Duration::from_millis(1000)).await;
    assert!(find(&toasts, &id).is_none());
    assert_eq!(toasts.current().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_remove_unknown_id_is_ignored() {
    let toasts = queue();
    let id = toasts.info("a");

    toasts.remove("does-not-exist");

    assert!(find(&toasts, &id).is_some_and(|t| t.visible));
    assert_eq!(toasts.active_timers(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_manual_remove_cancels_expiration() {
    let toasts = queue();
    let id = toasts.show(NotificationKind::Info, "a", lasting(1000));

    sleep(Duration::from_millis(200)).await;
    toasts.remove(&id);
    let frozen = find(&toasts, &id).expect("in exit grace").progress_percent;
    assert!((frozen - 80.0).abs() < 1e-9 || (frozen - 85.0).abs() < 1e-9);

    sleep(Duration::from_millis(100)).await;
    let toast = find(&toasts, &id).expect("in exit grace");
    assert_eq!(toast.progress_percent, frozen);

    sleep(Duration::from_millis(250)).await;
    assert!(toasts.current().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_clear_drops_everything_at_once() {
    let toasts = queue();
    toasts.success("a");
    toasts.warning("b");
    toasts.error("c");

    toasts.clear();

    assert!(toasts.current().is_empty());
    assert_eq!(toasts.active_timers(), 0);

    sleep(Duration::from_secs(10)).await;
    assert!(toasts.current().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_trigger_action_invokes_callback_and_removes() {
    let toasts = queue();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let id = toasts.show(
        NotificationKind::Info,
        "Con acción",
        ToastOptions::default().action(ToastAction::new("Ver", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
    );

    toasts.trigger_action(&id);
    toasts.trigger_action(&id);

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(find(&toasts, &id).is_some_and(|t| !t.visible));

    sleep(Duration::from_millis(350)).await;
    assert!(toasts.current().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_trigger_action_without_action_keeps_toast() {
    let toasts = queue();
    let id = toasts.info("Sin acción");

    toasts.trigger_action(&id);

    assert!(find(&toasts, &id).is_some_and(|t| t.visible));
}
