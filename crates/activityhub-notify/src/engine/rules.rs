//! Date predicates behind the automatic notification rules.
//!
//! All comparisons use local calendar time. Start dates are compared as
//! dates; end dates count until the last millisecond of their day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use activityhub_entity::Activity;

use crate::notification::dedup::ProcessedKeys;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Rules that can generate a notification, with their dedup key tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Activity starts tomorrow.
    StartingTomorrow,
    /// Activity finished within the recent window.
    RecentlyFinished,
    /// Finished activity without participation records.
    WithoutParticipation,
    /// Finished activity without evidence.
    WithoutEvidence,
    /// Activity created interactively.
    NewActivity,
}

impl RuleKind {
    /// Tag used as the dedup key prefix.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::StartingTomorrow => "inicio",
            Self::RecentlyFinished => "terminada",
            Self::WithoutParticipation => "sin-participacion",
            Self::WithoutEvidence => "sin-evidencia",
            Self::NewActivity => "nueva-actividad",
        }
    }

    /// Dedup key of this rule for one activity.
    pub fn dedup_key(&self, activity_id: i64) -> String {
        ProcessedKeys::make_key(self.tag(), activity_id)
    }
}

/// Last representable instant of `date` (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_ms = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_ms)
}

/// Whether the activity's start date is tomorrow relative to `now`.
pub fn starts_tomorrow(activity: &Activity, now: NaiveDateTime) -> bool {
    match (activity.start_date, now.date().succ_opt()) {
        (Some(start), Some(tomorrow)) => start == tomorrow,
        _ => false,
    }
}

/// Time elapsed since the activity's end of day, if it already ended.
pub fn elapsed_since_end(activity: &Activity, now: NaiveDateTime) -> Option<TimeDelta> {
    let end = end_of_day(activity.end_date?);
    if end < now { Some(now - end) } else { None }
}

/// Whole days since the end, rounded up: a few hours after the end is 1 day.
pub fn days_since_end(elapsed: TimeDelta) -> i64 {
    let ms = elapsed.num_milliseconds().max(0);
    (ms + DAY_MS - 1) / DAY_MS
}

/// Ended strictly less than `window_days` ago.
pub fn finished_recently(activity: &Activity, now: NaiveDateTime, window_days: i64) -> Option<i64> {
    let elapsed = elapsed_since_end(activity, now)?;
    if elapsed < TimeDelta::days(window_days) {
        Some(days_since_end(elapsed))
    } else {
        None
    }
}

/// Ended at most `window_days` ago.
pub fn finished_within(activity: &Activity, now: NaiveDateTime, window_days: i64) -> bool {
    elapsed_since_end(activity, now)
        .map(|elapsed| elapsed <= TimeDelta::days(window_days))
        .unwrap_or(false)
}
