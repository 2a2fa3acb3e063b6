//! Wall-clock abstraction for the date-based notification rules.
//!
//! Rules compare calendar dates against "now" in local time. Production
//! code reads the system clock; tests pin "now" with [`FixedClock`].

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// Source of the current local date and time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// The same instant as [`Clock::now`], in UTC.
    fn now_utc(&self) -> DateTime<Utc> {
        local_to_utc(self.now())
    }
}

/// Interpret a local wall-clock time as an instant.
///
/// Ambiguous times resolve to the earlier instant; times skipped by a DST
/// jump fall back to reading the value as UTC.
pub fn local_to_utc(local: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| local.and_utc())
}

/// Clock backed by the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually controlled clock.
///
/// Clones share the same instant, so a test can hold one handle while the
/// engine reads through another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    /// Create a clock pinned at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Move the clock to a specific instant.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Move the clock forward.
    pub fn advance(&self, delta: TimeDelta) {
        let mut guard = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *guard += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
