//! Timer handles owned by a toast.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Expiration and progress tasks of one toast.
///
/// Dropping the pair aborts both tasks, so removing the pair from the
/// queue's timer table is enough to cancel them on every removal path.
#[derive(Debug)]
pub struct TimerPair {
    expiration: JoinHandle<()>,
    progress: JoinHandle<()>,
}

impl TimerPair {
    /// Take ownership of the two task handles.
    pub fn new(expiration: JoinHandle<()>, progress: JoinHandle<()>) -> Self {
        Self {
            expiration,
            progress,
        }
    }
}

impl Drop for TimerPair {
    fn drop(&mut self) {
        self.expiration.abort();
        self.progress.abort();
    }
}

/// Progress remaining after `elapsed` of `duration`, in percent.
///
/// Equivalent to subtracting `100 / duration * tick` once per tick, but
/// computed from elapsed time so it lands on exactly 0.
pub fn progress_after(duration: Duration, elapsed: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    let remaining = duration.saturating_sub(elapsed);
    remaining.as_secs_f64() / duration.as_secs_f64() * 100.0
}
