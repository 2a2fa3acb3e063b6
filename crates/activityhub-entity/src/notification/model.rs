//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use activityhub_core::types::NotificationKind;

/// A persisted, user-visible notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Backend identifier; `0` until one is assigned.
    pub id: i64,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Severity.
    pub kind: NotificationKind,
    /// When the notification was generated.
    pub timestamp: DateTime<Utc>,
    /// Whether the user has read this notification.
    pub read: bool,
    /// In-app path (and query) opened on click-through.
    pub navigation_target: Option<String>,
}

impl Notification {
    /// Build an unread, not-yet-persisted notification stamped now.
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            message: message.into(),
            kind,
            timestamp: Utc::now(),
            read: false,
            navigation_target: None,
        }
    }

    /// Attach a click-through target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.navigation_target = Some(target.into());
        self
    }

    /// Whether the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}
