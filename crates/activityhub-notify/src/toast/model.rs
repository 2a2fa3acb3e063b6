//! Toast model.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use activityhub_core::types::NotificationKind;

/// Button shown on a toast together with the callback it runs.
#[derive(Clone)]
pub struct ToastAction {
    /// Button label.
    pub label: String,
    callback: Arc<dyn Fn() + Send + Sync>,
}

impl ToastAction {
    /// Create an action.
    pub fn new(label: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Arc::new(callback),
        }
    }

    /// Run the callback.
    pub fn invoke(&self) {
        (self.callback)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A transient UI message. Never persisted.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Process-local unique id.
    pub id: String,
    /// Severity.
    pub kind: NotificationKind,
    /// Optional title.
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// Total on-screen lifetime.
    pub duration: Duration,
    /// Optional action button.
    pub action: Option<ToastAction>,
    /// `false` once removal started; the UI plays the exit animation.
    pub visible: bool,
    /// Remaining lifetime, 100 down to 0.
    pub progress_percent: f64,
}

/// Optional parameters of [`ToastQueue::show`](super::ToastQueue::show).
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    /// Title shown above the message.
    pub title: Option<String>,
    /// Lifetime override; the kind's default otherwise.
    pub duration: Option<Duration>,
    /// Action button.
    pub action: Option<ToastAction>,
}

impl ToastOptions {
    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Override the lifetime.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Attach an action button.
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }
}
