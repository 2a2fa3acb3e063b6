//! Notification store: canonical list, unread count, remote sync.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::watch;

use activityhub_core::error::AppError;
use activityhub_entity::Notification;

use super::sample::sample_notifications;
use crate::sources::NotificationBackend;
use crate::state::StateCell;

/// Single source of truth for the current user's notifications.
///
/// Remote calls are attempted first; whatever their outcome, the local
/// state is updated and both streams emit (list first, unread count
/// second). Failures are logged and never reach subscribers.
#[derive(Debug)]
pub struct NotificationStore {
    /// Remote counterpart.
    backend: Arc<dyn NotificationBackend>,
    /// Notification list, newest first.
    list: StateCell<Vec<Notification>>,
    /// Unread count derived from `list`.
    unread: StateCell<usize>,
    /// Serializes list+count commits.
    commit_lock: Mutex<()>,
}

impl NotificationStore {
    /// Create an empty store.
    pub fn new(backend: Arc<dyn NotificationBackend>) -> Self {
        Self {
            backend,
            list: StateCell::new(Vec::new()),
            unread: StateCell::new(0),
            commit_lock: Mutex::new(()),
        }
    }

    /// Replace the local set with the backend's.
    ///
    /// Any failure (missing endpoint or otherwise) installs the sample set.
    pub async fn fetch_all(&self) {
        let notifications = match self.backend.fetch_notifications().await {
            Ok(raw) => Notification::from_backend_list(&raw),
            Err(e) if e.is_not_found() => {
                tracing::warn!(
                    "Notification endpoint not available, using sample notifications: {}",
                    e
                );
                sample_notifications(Utc::now())
            }
            Err(e) => {
                tracing::error!(
                    "Failed to fetch notifications, using sample notifications: {}",
                    e
                );
                sample_notifications(Utc::now())
            }
        };

        tracing::debug!("Loaded {} notifications", notifications.len());
        self.commit(|list| *list = notifications);
    }

    /// Mark one notification as read, locally regardless of the remote outcome.
    pub async fn mark_read(&self, id: i64) {
        if let Err(e) = self.backend.mark_read(id).await {
            log_remote_failure("mark notification read", &e);
        }

        self.commit(|list| {
            for n in list.iter_mut().filter(|n| n.id == id) {
                n.read = true;
            }
        });
    }

    /// Mark every notification as read, locally regardless of the remote outcome.
    pub async fn mark_all_read(&self) {
        if let Err(e) = self.backend.mark_all_read().await {
            log_remote_failure("mark all notifications read", &e);
        }

        self.commit(|list| {
            for n in list.iter_mut() {
                n.read = true;
            }
        });
    }

    /// Delete one notification, locally regardless of the remote outcome.
    pub async fn remove(&self, id: i64) {
        if let Err(e) = self.backend.delete_notification(id).await {
            log_remote_failure("delete notification", &e);
        }

        self.commit(|list| list.retain(|n| n.id != id));
    }

    /// Append a locally generated notification at the top of the list.
    ///
    /// Entries without an id get a process-local one above every id
    /// currently in the list. Returns the id used.
    pub fn push_local(&self, mut notification: Notification) -> i64 {
        let mut assigned = notification.id;
        self.commit(|list| {
            if notification.id == 0 {
                notification.id = list.iter().map(|n| n.id).max().unwrap_or(0).max(0) + 1;
            }
            assigned = notification.id;
            list.insert(0, notification);
        });
        assigned
    }

    /// Snapshot of the current list.
    pub fn current_list(&self) -> Vec<Notification> {
        self.list.snapshot()
    }

    /// Snapshot of the current unread count.
    pub fn current_unread_count(&self) -> usize {
        self.unread.snapshot()
    }

    /// Subscribe to list snapshots.
    pub fn subscribe_list(&self) -> watch::Receiver<Vec<Notification>> {
        self.list.subscribe()
    }

    /// Subscribe to unread-count snapshots.
    pub fn subscribe_unread_count(&self) -> watch::Receiver<usize> {
        self.unread.subscribe()
    }

    /// Apply a list mutation, then recompute and publish the unread count.
    fn commit(&self, f: impl FnOnce(&mut Vec<Notification>)) {
        let _guard = self.commit_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.list.update(f);
        let unread = self
            .list
            .with(|list| list.iter().filter(|n| n.is_unread()).count());
        self.unread.replace(unread);
    }
}

fn log_remote_failure(operation: &str, err: &AppError) {
    if err.is_not_found() {
        tracing::warn!("Remote {} not available, applied locally: {}", operation, err);
    } else {
        tracing::error!("Remote {} failed, applied locally: {}", operation, err);
    }
}
