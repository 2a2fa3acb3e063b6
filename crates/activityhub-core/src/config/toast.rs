//! Toast queue configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::NotificationKind;

/// Timing settings for on-screen toasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Progress timer tick in milliseconds.
    #[serde(default = "default_tick")]
    pub tick_ms: u64,
    /// Delay between hiding a toast and deleting it, in milliseconds.
    #[serde(default = "default_exit_grace")]
    pub exit_grace_ms: u64,
    /// Default lifetime of a success toast.
    #[serde(default = "default_success")]
    pub success_ms: u64,
    /// Default lifetime of an info toast.
    #[serde(default = "default_info")]
    pub info_ms: u64,
    /// Default lifetime of a warning toast.
    #[serde(default = "default_warning")]
    pub warning_ms: u64,
    /// Default lifetime of an error toast.
    #[serde(default = "default_error")]
    pub error_ms: u64,
    /// Initial value of the "show toasts on screen" preference.
    #[serde(default = "default_true")]
    pub show_on_screen: bool,
}

impl ToastConfig {
    /// Default lifetime for a toast of the given kind.
    pub fn default_duration(&self, kind: NotificationKind) -> Duration {
        let ms = match kind {
            NotificationKind::Success => self.success_ms,
            NotificationKind::Info => self.info_ms,
            NotificationKind::Warning => self.warning_ms,
            NotificationKind::Error => self.error_ms,
        };
        Duration::from_millis(ms)
    }

    /// Progress tick as a [`Duration`].
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Exit animation grace period as a [`Duration`].
    pub fn exit_grace(&self) -> Duration {
        Duration::from_millis(self.exit_grace_ms)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick(),
            exit_grace_ms: default_exit_grace(),
            success_ms: default_success(),
            info_ms: default_info(),
            warning_ms: default_warning(),
            error_ms: default_error(),
            show_on_screen: true,
        }
    }
}

fn default_tick() -> u64 {
    50
}

fn default_exit_grace() -> u64 {
    300
}

fn default_success() -> u64 {
    3000
}

fn default_info() -> u64 {
    4000
}

fn default_warning() -> u64 {
    5000
}

fn default_error() -> u64 {
    7000
}

fn default_true() -> bool {
    true
}
