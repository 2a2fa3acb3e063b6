//! Click-through navigation seam.

/// Routes the UI to an in-app path such as `/actividades/42?tab=evidencias`.
///
/// Toast actions call this; the routing layer itself lives outside the
/// notification core.
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// Navigate to the given path (with optional query string).
    fn navigate(&self, target: &str);
}

/// Navigator for headless runs: records the request in the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, target: &str) {
        tracing::info!("Navigation requested: {}", target);
    }
}
