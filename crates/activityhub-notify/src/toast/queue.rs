//! Toast queue: owns the toast list and every toast's timers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant};
use uuid::Uuid;

use activityhub_core::config::ToastConfig;
use activityhub_core::types::NotificationKind;

use super::model::{Toast, ToastOptions};
use super::timer::{TimerPair, progress_after};
use crate::state::StateCell;

/// Queue of concurrently displayed toasts.
///
/// Cloning is cheap; clones share the same list and timers. Every mutation
/// goes through the list cell, so subscribers always see whole snapshots.
/// Must be used inside a Tokio runtime.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Timing configuration.
    config: ToastConfig,
    /// Toasts in display order.
    toasts: StateCell<Vec<Toast>>,
    /// Toast id → its live timers. Lock order: `timers` before `toasts`.
    timers: Mutex<HashMap<String, TimerPair>>,
}

impl ToastQueue {
    /// Create an empty queue.
    pub fn new(config: ToastConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                toasts: StateCell::new(Vec::new()),
                timers: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Display a toast and return its id immediately.
    ///
    /// Starts a one-shot expiration timer and a repeating progress timer,
    /// both owned by the toast until it is removed.
    pub fn show(
        &self,
        kind: NotificationKind,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let duration = options
            .duration
            .unwrap_or_else(|| self.inner.config.default_duration(kind));

        let toast = Toast {
            id: id.clone(),
            kind,
            title: options.title,
            message: message.into(),
            duration,
            action: options.action,
            visible: true,
            progress_percent: 100.0,
        };

        let mut timers = self.inner.timers.lock().unwrap_or_else(|e| e.into_inner());
        self.inner.toasts.update(|list| list.push(toast));

        let weak = Arc::downgrade(&self.inner);
        let expiration = tokio::spawn(expire_after(weak.clone(), id.clone(), duration));
        let progress = tokio::spawn(track_progress(
            weak,
            id.clone(),
            duration,
            self.inner.config.tick(),
        ));
        timers.insert(id.clone(), TimerPair::new(expiration, progress));

        tracing::debug!("Toast {} shown ({}, {:?})", id, kind, duration);
        id
    }

    /// Show a success toast with the default duration.
    pub fn success(&self, message: impl Into<String>) -> String {
        self.show(NotificationKind::Success, message, ToastOptions::default())
    }

    /// Show an info toast with the default duration.
    pub fn info(&self, message: impl Into<String>) -> String {
        self.show(NotificationKind::Info, message, ToastOptions::default())
    }

    /// Show a warning toast with the default duration.
    pub fn warning(&self, message: impl Into<String>) -> String {
        self.show(NotificationKind::Warning, message, ToastOptions::default())
    }

    /// Show an error toast with the default duration.
    pub fn error(&self, message: impl Into<String>) -> String {
        self.show(NotificationKind::Error, message, ToastOptions::default())
    }

    /// Start removing a toast.
    ///
    /// Cancels its timers, hides it, and deletes it after the exit grace
    /// period. Unknown ids and toasts already leaving are ignored.
    pub fn remove(&self, id: &str) {
        self.inner.remove(id);
    }

    /// Run a toast's action callback, then remove the toast.
    pub fn trigger_action(&self, id: &str) {
        let action = self.inner.toasts.with(|list| {
            list.iter()
                .find(|t| t.id == id && t.visible)
                .and_then(|t| t.action.clone())
        });

        if let Some(action) = action {
            action.invoke();
            self.remove(id);
        }
    }

    /// Cancel every timer and empty the list at once, without exit grace.
    pub fn clear(&self) {
        let mut timers = self.inner.timers.lock().unwrap_or_else(|e| e.into_inner());
        timers.clear();
        self.inner.toasts.replace(Vec::new());
        tracing::debug!("Toast queue cleared");
    }

    /// Snapshot of the current toasts.
    pub fn current(&self) -> Vec<Toast> {
        self.inner.toasts.snapshot()
    }

    /// Subscribe to toast list snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.toasts.subscribe()
    }

    /// Number of toasts with live timers.
    pub fn active_timers(&self) -> usize {
        self.inner
            .timers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl Inner {
    fn remove(self: &Arc<Self>, id: &str) {
        let hidden = {
            let mut timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
            let _cancelled = timers.remove(id);
            self.toasts.update_if(|list| match list.iter_mut().find(|t| t.id == id) {
                Some(toast) if toast.visible => {
                    toast.visible = false;
                    true
                }
                _ => false,
            })
        };

        if !hidden {
            return;
        }

        let weak = Arc::downgrade(self);
        let id = id.to_string();
        let grace = self.config.exit_grace();
        tokio::spawn(async move {
            time::sleep(grace).await;
            if let Some(inner) = weak.upgrade() {
                inner.toasts.update_if(|list| {
                    let before = list.len();
                    list.retain(|t| t.id != id);
                    list.len() != before
                });
                tracing::debug!("Toast {} deleted", id);
            }
        });
    }
}

async fn expire_after(inner: Weak<Inner>, id: String, duration: Duration) {
    time::sleep(duration).await;
    if let Some(inner) = inner.upgrade() {
        tracing::debug!("Toast {} expired", id);
        inner.toasts.update_if(|list| match list.iter_mut().find(|t| t.id == id && t.visible) {
            Some(toast) => {
                toast.progress_percent = 0.0;
                true
            }
            None => false,
        });
        inner.remove(&id);
    }
}

async fn track_progress(inner: Weak<Inner>, id: String, duration: Duration, tick: Duration) {
    let mut ticker = time::interval_at(Instant::now() + tick, tick);
    let mut elapsed = Duration::ZERO;

    loop {
        ticker.tick().await;
        elapsed += tick;

        let Some(inner) = inner.upgrade() else {
            break;
        };

        let percent = progress_after(duration, elapsed);
        let alive = inner.toasts.update_if(|list| {
            match list.iter_mut().find(|t| t.id == id && t.visible) {
                Some(toast) => {
                    toast.progress_percent = percent;
                    true
                }
                None => false,
            }
        });

        if !alive || percent <= 0.0 {
            break;
        }
    }
}
