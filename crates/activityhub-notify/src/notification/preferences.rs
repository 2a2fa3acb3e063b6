//! "Show toasts on screen" user preference.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared toggle read by the engine before every toast emission.
///
/// Clones share the same flag; the settings UI flips it, the engine reads it.
#[derive(Debug, Clone)]
pub struct ToastPreference {
    enabled: Arc<AtomicBool>,
}

impl ToastPreference {
    /// Create a preference with the given initial value.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    /// Whether toasts should be shown.
    pub fn show_toasts(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Update the preference.
    pub fn set_show_toasts(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        tracing::debug!("Toast display preference set to {}", enabled);
    }
}

impl Default for ToastPreference {
    fn default() -> Self {
        Self::new(true)
    }
}
