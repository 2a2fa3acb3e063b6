//! Automatic notification engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Polling and rule-window settings for the rule engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seconds between evaluation passes.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Window, in days, of the "recently finished" rule.
    #[serde(default = "default_recent_window")]
    pub recent_window_days: i64,
    /// Window, in days, of the missing participation/evidence rules.
    #[serde(default = "default_missing_data_window")]
    pub missing_data_window_days: i64,
}

impl EngineConfig {
    /// Poll interval as a [`Duration`], never shorter than one second.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds.max(1))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: default_poll_interval(),
            recent_window_days: default_recent_window(),
            missing_data_window_days: default_missing_data_window(),
        }
    }
}

fn default_poll_interval() -> u64 {
    60
}

fn default_recent_window() -> i64 {
    7
}

fn default_missing_data_window() -> i64 {
    30
}
