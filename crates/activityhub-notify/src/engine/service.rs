//! Automatic notification engine: polls domain data and emits alerts.

use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use activityhub_core::config::EngineConfig;
use activityhub_core::traits::Navigator;
use activityhub_core::types::{Clock, SystemClock, local_to_utc};
use activityhub_entity::Activity;

use super::rules::{self, RuleKind};
use crate::notification::dedup::ProcessedKeys;
use crate::notification::formatter::{GeneratedAlert, NotificationFormatter};
use crate::notification::preferences::ToastPreference;
use crate::notification::store::NotificationStore;
use crate::sources::{ActivitySource, EvidenceSource, ParticipationSource};
use crate::toast::{ToastAction, ToastOptions, ToastQueue};

/// The three read-only domain collections the rules evaluate.
#[derive(Debug, Clone)]
pub struct EngineSources {
    /// Activity list.
    pub activities: Arc<dyn ActivitySource>,
    /// Participation records per activity.
    pub participation: Arc<dyn ParticipationSource>,
    /// Evidence records.
    pub evidence: Arc<dyn EvidenceSource>,
}

/// Handle of the running poll loop.
#[derive(Debug)]
struct Schedule {
    cancel: watch::Sender<bool>,
    _handle: JoinHandle<()>,
}

/// Periodically derives notifications from activities, participation and
/// evidence, without any backend-side scheduling.
///
/// Each `(rule, activity)` pair fires at most once per process lifetime.
#[derive(Debug)]
pub struct AutoNotificationEngine {
    sources: EngineSources,
    store: Arc<NotificationStore>,
    toasts: ToastQueue,
    preference: ToastPreference,
    navigator: Arc<dyn Navigator>,
    clock: Arc<dyn Clock>,
    config: EngineConfig,
    processed: ProcessedKeys,
    schedule: Mutex<Option<Schedule>>,
}

impl AutoNotificationEngine {
    /// Create a stopped engine reading the system clock.
    pub fn new(
        sources: EngineSources,
        store: Arc<NotificationStore>,
        toasts: ToastQueue,
        preference: ToastPreference,
        navigator: Arc<dyn Navigator>,
        config: EngineConfig,
    ) -> Self {
        Self {
            sources,
            store,
            toasts,
            preference,
            navigator,
            clock: Arc::new(SystemClock),
            config,
            processed: ProcessedKeys::new(),
            schedule: Mutex::new(None),
        }
    }

    /// Replace the clock the rules read "now" from.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Start polling: one pass right away, then one every poll interval.
    ///
    /// Returns `false` (and does nothing) when already running.
    pub fn start(self: &Arc<Self>) -> bool {
        let mut schedule = self.schedule.lock().unwrap_or_else(|e| e.into_inner());
        if schedule.is_some() {
            tracing::debug!("Notification engine already running");
            return false;
        }

        let (cancel, cancel_rx) = watch::channel(false);
        let engine = Arc::clone(self);
        let handle = tokio::spawn(async move { engine.run(cancel_rx).await });

        *schedule = Some(Schedule {
            cancel,
            _handle: handle,
        });

        tracing::info!(
            "Notification engine started (poll every {}s)",
            self.config.poll_interval().as_secs()
        );
        true
    }

    /// Stop polling. A pass already in flight finishes; no new pass starts.
    ///
    /// Returns `false` (and does nothing) when already stopped.
    pub fn stop(&self) -> bool {
        let schedule = self
            .schedule
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        match schedule {
            Some(schedule) => {
                let _ = schedule.cancel.send(true);
                tracing::info!("Notification engine stopped");
                true
            }
            None => {
                tracing::debug!("Notification engine already stopped");
                false
            }
        }
    }

    /// Whether the poll loop is scheduled.
    pub fn is_running(&self) -> bool {
        self.schedule
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Forget every processed key so each rule may fire again.
    pub fn reset_dedup_cache(&self) {
        self.processed.reset();
        tracing::debug!("Notification dedup cache reset");
    }

    /// Number of `(rule, activity)` pairs that already fired.
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Announce an interactively created activity.
    ///
    /// Returns `true` when a notification was emitted.
    pub fn notify_new_activity(&self, activity: &Activity, creator_name: Option<&str>) -> bool {
        self.emit(
            NotificationFormatter::new_activity(activity, creator_name),
            self.clock.now(),
        )
    }

    /// Run one evaluation pass and return the number of notifications emitted.
    ///
    /// Without the activity list the pass is skipped entirely.
    pub async fn run_pass(&self) -> usize {
        let activities = match self.sources.activities.activities().await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Skipping notification pass, activity list unavailable: {}", e);
                return 0;
            }
        };

        let now = self.clock.now();
        let mut emitted = 0;
        emitted += self.check_starting_tomorrow(&activities, now);
        emitted += self.check_recently_finished(&activities, now);
        emitted += self.check_without_participation(&activities, now).await;
        emitted += self.check_without_evidence(&activities, now).await;

        tracing::debug!(
            "Notification pass over {} activities emitted {}",
            activities.len(),
            emitted
        );
        emitted
    }

    async fn run(&self, mut cancel: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.poll_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = cancel.changed() => break,
                _ = interval.tick() => {
                    self.run_pass().await;
                }
            }
        }

        tracing::debug!("Notification poll loop ended");
    }

    fn check_starting_tomorrow(&self, activities: &[Activity], now: NaiveDateTime) -> usize {
        activities
            .iter()
            .filter(|a| rules::starts_tomorrow(a, now))
            .filter(|a| self.emit(NotificationFormatter::starting_tomorrow(a), now))
            .count()
    }

    fn check_recently_finished(&self, activities: &[Activity], now: NaiveDateTime) -> usize {
        let window = self.config.recent_window_days;
        activities
            .iter()
            .filter_map(|a| rules::finished_recently(a, now, window).map(|days| (a, days)))
            .filter(|(a, days)| {
                self.emit(NotificationFormatter::recently_finished(a, *days), now)
            })
            .count()
    }

    async fn check_without_participation(
        &self,
        activities: &[Activity],
        now: NaiveDateTime,
    ) -> usize {
        let mut emitted = 0;

        for activity in self.pending(activities, now, RuleKind::WithoutParticipation) {
            match self
                .sources
                .participation
                .participation_for_activity(activity.id)
                .await
            {
                Ok(records) if records.is_empty() => {
                    if self.emit(NotificationFormatter::without_participation(activity), now) {
                        emitted += 1;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        "Skipping participation check for activity {}: {}",
                        activity.id,
                        e
                    );
                }
            }
        }

        emitted
    }

    async fn check_without_evidence(&self, activities: &[Activity], now: NaiveDateTime) -> usize {
        let candidates = self.pending(activities, now, RuleKind::WithoutEvidence);
        if candidates.is_empty() {
            return 0;
        }

        let evidence = match self.sources.evidence.all_evidence().await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Skipping evidence checks, evidence list unavailable: {}", e);
                return 0;
            }
        };

        candidates
            .into_iter()
            .filter(|a| !evidence.iter().any(|e| e.belongs_to(a.id)))
            .filter(|a| self.emit(NotificationFormatter::without_evidence(a), now))
            .count()
    }

    /// Activities in the missing-data window whose `rule` has not fired yet.
    fn pending<'a>(
        &self,
        activities: &'a [Activity],
        now: NaiveDateTime,
        rule: RuleKind,
    ) -> Vec<&'a Activity> {
        let window = self.config.missing_data_window_days;
        activities
            .iter()
            .filter(|a| rules::finished_within(a, now, window))
            .filter(|a| !self.processed.contains(&rule.dedup_key(a.id)))
            .collect()
    }

    /// Emit a toast and a stored notification unless `alert.key` already fired.
    ///
    /// The stored notification is stamped with `now`, the pass's local time.
    fn emit(&self, alert: GeneratedAlert, now: NaiveDateTime) -> bool {
        if !self.processed.claim(&alert.key) {
            tracing::trace!("Notification deduplicated: key='{}'", alert.key);
            return false;
        }

        if self.preference.show_toasts() {
            let navigator = Arc::clone(&self.navigator);
            let target = alert.target.clone();
            let action = ToastAction::new(alert.action_label.clone(), move || {
                navigator.navigate(&target)
            });
            self.toasts.show(
                alert.kind,
                alert.message.clone(),
                ToastOptions::default()
                    .title(alert.title.clone())
                    .action(action),
            );
        }

        let id = self.store.push_local(alert.to_notification(local_to_utc(now)));
        tracing::info!("Generated notification {} (key='{}')", id, alert.key);
        true
    }
}
