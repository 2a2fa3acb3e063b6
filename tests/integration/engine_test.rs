//! Automatic notification engine integration tests.

mod helpers;

use std::time::Duration;

use chrono::TimeDelta;
use tokio::time::sleep;

use activityhub_core::config::EngineConfig;
use activityhub_core::types::{Clock, NotificationKind};
use activityhub_entity::Activity;

use helpers::{TestEngine, day};

const PARTICIPATION_TITLE: &str = "Actividad sin participación";
const EVIDENCE_TITLE: &str = "Actividad sin evidencias";
const FINISHED_TITLE: &str = "Actividad finalizada";

fn count_titled(t: &TestEngine, title: &str) -> usize {
    t.titles().iter().filter(|s| s.as_str() == title).count()
}

#[tokio::test(start_paused = true)]
async fn test_activity_finished_yesterday_end_to_end() {
    let t = TestEngine::new();
    t.activities.set(vec![Activity::new(42, "Taller").ending(day(-1))]);

    let emitted = t.engine.run_pass().await;

    assert_eq!(emitted, 3);
    assert_eq!(
        t.titles(),
        vec![EVIDENCE_TITLE, PARTICIPATION_TITLE, FINISHED_TITLE]
    );

    let finished = t.notification_for("/actividades/42").expect("finished alert");
    assert_eq!(finished.kind, NotificationKind::Success);
    assert_eq!(finished.message, "La actividad \"Taller\" finalizó hace 1 día.");
    assert!(!finished.read);

    let participation = t
        .notification_for("/actividades/42?tab=participacion")
        .expect("participation alert");
    assert_eq!(participation.kind, NotificationKind::Warning);
    assert!(t.notification_for("/actividades/42?tab=evidencias").is_some());

    assert_eq!(t.toasts.current().len(), 3);
    assert_eq!(t.store.current_unread_count(), 3);
    assert_eq!(t.engine.processed_count(), 3);

    assert_eq!(t.engine.run_pass().await, 0);
    assert_eq!(t.store.current_list().len(), 3);
    assert_eq!(t.toasts.current().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_generated_notifications_use_engine_clock() {
    let t = TestEngine::new();
    t.activities.set(vec![Activity::new(42, "Taller").ending(day(-1))]);

    t.engine.run_pass().await;

    let stamp = t.clock.now_utc();
    let list = t.store.current_list();
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|n| n.timestamp == stamp));

    t.clock.advance(TimeDelta::hours(3));
    assert!(t.engine.notify_new_activity(&Activity::new(43, "Feria"), None));
    assert_eq!(
        t.store.current_list()[0].timestamp,
        stamp + TimeDelta::hours(3)
    );
}

#[tokio::test(start_paused = true)]
async fn test_starting_tomorrow_fires_once() {
    let t = TestEngine::new();
    t.activities.set(vec![
        Activity::new(7, "Feria").starting(day(1)),
        Activity::new(8, "Congreso").starting(day(2)),
        Activity::new(9, "Hoy").starting(day(0)),
    ]);

    assert_eq!(t.engine.run_pass().await, 1);
    assert_eq!(t.engine.run_pass().await, 0);

    let list = t.store.current_list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Actividad próxima");
    assert_eq!(list[0].navigation_target.as_deref(), Some("/actividades/7"));
    assert_eq!(list[0].kind, NotificationKind::Info);
}

#[tokio::test(start_paused = true)]
async fn test_participation_rule_depends_on_record_count() {
    let t = TestEngine::new();
    t.activities.set(vec![
        Activity::new(1, "Sin registros").ending(day(-3)),
        Activity::new(2, "Con registro").ending(day(-3)),
    ]);
    t.participation.set_count(2, 1);

    t.engine.run_pass().await;

    assert!(t.notification_for("/actividades/1?tab=participacion").is_some());
    assert!(t.notification_for("/actividades/2?tab=participacion").is_none());
    assert_eq!(count_titled(&t, PARTICIPATION_TITLE), 1);
}

#[tokio::test(start_paused = true)]
async fn test_participation_failure_is_isolated_per_activity() {
    let t = TestEngine::new();
    t.activities.set(vec![
        Activity::new(1, "Falla").ending(day(-2)),
        Activity::new(2, "Ok").ending(day(-2)),
    ]);
    t.participation.fail_for(1);

    t.engine.run_pass().await;

    assert!(t.notification_for("/actividades/1?tab=participacion").is_none());
    assert!(t.notification_for("/actividades/2?tab=participacion").is_some());
    assert_eq!(count_titled(&t, EVIDENCE_TITLE), 2);
    assert_eq!(count_titled(&t, FINISHED_TITLE), 2);

    // The failed check was not recorded, so it is retried next pass.
    let before = t.participation.calls();
    t.engine.run_pass().await;
    assert_eq!(t.participation.calls(), before + 1);
}

#[tokio::test(start_paused = true)]
async fn test_evidence_is_fetched_once_per_pass() {
    let t = TestEngine::new();
    t.activities.set(vec![
        Activity::new(1, "a").ending(day(-1)),
        Activity::new(2, "b").ending(day(-5)),
        Activity::new(3, "c").ending(day(-20)),
    ]);
    t.evidence.attach(2);

    t.engine.run_pass().await;

    assert_eq!(t.evidence.calls(), 1);
    assert!(t.notification_for("/actividades/1?tab=evidencias").is_some());
    assert!(t.notification_for("/actividades/2?tab=evidencias").is_none());
    assert!(t.notification_for("/actividades/3?tab=evidencias").is_some());
}

#[tokio::test(start_paused = true)]
async fn test_evidence_failure_skips_only_evidence_rule() {
    let t = TestEngine::new();
    t.activities.set(vec![Activity::new(5, "Taller").ending(day(-1))]);
    t.evidence.set_failing(true);

    assert_eq!(t.engine.run_pass().await, 2);
    assert_eq!(count_titled(&t, EVIDENCE_TITLE), 0);

    t.evidence.set_failing(false);
    assert_eq!(t.engine.run_pass().await, 1);
    assert_eq!(count_titled(&t, EVIDENCE_TITLE), 1);
}

#[tokio::test(start_paused = true)]
async fn test_no_evidence_fetch_without_candidates() {
    let t = TestEngine::new();
    t.activities.set(vec![Activity::new(1, "Futura").starting(day(10))]);

    t.engine.run_pass().await;

    assert_eq!(t.evidence.calls(), 0);
    assert_eq!(t.participation.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_window_edges() {
    let t = TestEngine::new();
    t.activities.set(vec![
        Activity::new(1, "Hoy").ending(day(0)),
        Activity::new(2, "Hace siete").ending(day(-7)),
        Activity::new(3, "Hace ocho").ending(day(-8)),
        Activity::new(4, "Hace cuarenta").ending(day(-40)),
        Activity::new(5, "Sin fechas"),
    ]);
    t.participation.set_count(2, 1);
    t.participation.set_count(3, 1);
    t.evidence.attach(2);
    t.evidence.attach(3);

    t.engine.run_pass().await;

    let finished: Vec<String> = t
        .store
        .current_list()
        .into_iter()
        .filter(|n| n.title == FINISHED_TITLE)
        .map(|n| n.message)
        .collect();
    assert_eq!(
        finished,
        vec!["La actividad \"Hace siete\" finalizó hace 7 días.".to_string()]
    );
    assert_eq!(t.store.current_list().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_missing_data_rules_stop_after_window() {
    let t = TestEngine::new();
    t.activities.set(vec![
        Activity::new(1, "Vieja").ending(day(-29)),
        Activity::new(2, "Muy vieja").ending(day(-31)),
    ]);

    assert_eq!(t.engine.run_pass().await, 2);
    assert!(t.notification_for("/actividades/1?tab=participacion").is_some());
    assert!(t.notification_for("/actividades/1?tab=evidencias").is_some());
    assert!(t.notification_for("/actividades/2?tab=participacion").is_none());

    t.clock.advance(TimeDelta::days(2));
    t.engine.reset_dedup_cache();
    assert_eq!(t.engine.run_pass().await, 0);
}

#[tokio::test(start_paused = true)]
async fn test_activity_list_failure_skips_pass() {
    let t = TestEngine::new();
    t.activities.set(vec![Activity::new(42, "Taller").ending(day(-1))]);
    t.activities.set_failing(true);

    assert_eq!(t.engine.run_pass().await, 0);
    assert!(t.store.current_list().is_empty());
    assert!(t.toasts.current().is_empty());
    assert_eq!(t.participation.calls(), 0);
    assert_eq!(t.evidence.calls(), 0);

    t.activities.set_failing(false);
    assert_eq!(t.engine.run_pass().await, 3);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_toasts_still_store_notifications() {
    let t = TestEngine::new();
    t.preference.set_show_toasts(false);
    t.activities.set(vec![Activity::new(42, "Taller").ending(day(-1))]);

    assert_eq!(t.engine.run_pass().await, 3);
    assert!(t.toasts.current().is_empty());
    assert_eq!(t.store.current_list().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_toast_action_navigates_to_target() {
    let t = TestEngine::new();
    t.activities.set(vec![Activity::new(42, "Taller").ending(day(-1))]);
    t.engine.run_pass().await;

    let toast = t
        .toasts
        .current()
        .into_iter()
        .find(|toast| toast.title.as_deref() == Some(EVIDENCE_TITLE))
        .expect("evidence toast");
    assert_eq!(
        toast.action.as_ref().map(|a| a.label.as_str()),
        Some("Subir evidencias")
    );

    t.toasts.trigger_action(&toast.id);

    assert_eq!(t.navigator.targets(), vec!["/actividades/42?tab=evidencias"]);
}

#[tokio::test(start_paused = true)]
async fn test_new_activity_is_announced_once() {
    let t = TestEngine::new();
    let activity = Activity::new(77, "Hackatón");

    assert!(t.engine.notify_new_activity(&activity, Some("Ana")));
    assert!(!t.engine.notify_new_activity(&activity, Some("Ana")));

    let list = t.store.current_list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Nueva actividad");
    assert_eq!(list[0].message, "Ana creó la actividad \"Hackatón\".");
    assert_eq!(t.toasts.current().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reset_dedup_cache_allows_refiring() {
    let t = TestEngine::new();
    t.activities.set(vec![Activity::new(42, "Taller").ending(day(-1))]);

    assert_eq!(t.engine.run_pass().await, 3);
    assert_eq!(t.engine.run_pass().await, 0);

    t.engine.reset_dedup_cache();
    assert_eq!(t.engine.processed_count(), 0);

    assert_eq!(t.engine.run_pass().await, 3);
    assert_eq!(t.store.current_list().len(), 6);
}

#[tokio::test(start_paused = true)]
async fn test_start_runs_immediately_then_on_interval() {
    let t = TestEngine::new();
    t.activities.set(vec![Activity::new(42, "Taller").ending(day(-1))]);

    assert!(t.engine.start());
    assert!(!t.engine.start());
    assert!(t.engine.is_running());

    sleep(Duration::from_millis(10)).await;
    assert_eq!(t.activities.calls(), 1);
    assert_eq!(t.store.current_list().len(), 3);

    sleep(Duration::from_secs(60)).await;
    assert_eq!(t.activities.calls(), 2);
    assert_eq!(t.store.current_list().len(), 3);

    assert!(t.engine.stop());
    assert!(!t.engine.stop());
    assert!(!t.engine.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_stop_prevents_further_passes() {
    let t = TestEngine::new();

    t.engine.start();
    sleep(Duration::from_millis(10)).await;
    assert_eq!(t.activities.calls(), 1);

    t.engine.stop();
    sleep(Duration::from_secs(180)).await;
    assert_eq!(t.activities.calls(), 1);

    // Restarting schedules a fresh immediate pass.
    assert!(t.engine.start());
    sleep(Duration::from_millis(10)).await;
    assert_eq!(t.activities.calls(), 2);
    t.engine.stop();
}

#[tokio::test(start_paused = true)]
async fn test_zero_poll_interval_still_polls() {
    let t = TestEngine::with_engine_config(EngineConfig {
        poll_interval_seconds: 0,
        ..Default::default()
    });

    assert!(t.engine.start());
    sleep(Duration::from_millis(10)).await;
    assert_eq!(t.activities.calls(), 1);

    sleep(Duration::from_secs(1)).await;
    assert_eq!(t.activities.calls(), 2);

    assert!(t.engine.stop());
}
