//! Read-only collaborators the notification core consumes.
//!
//! Implemented against the REST backend by `activityhub-client` and by
//! in-memory fakes in tests.

use async_trait::async_trait;
use serde_json::Value;

use activityhub_core::result::AppResult;
use activityhub_entity::{Activity, Evidence, Participation};

/// Source of the full activity list.
#[async_trait]
pub trait ActivitySource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch every activity visible to the current user.
    async fn activities(&self) -> AppResult<Vec<Activity>>;
}

/// Source of participation records.
#[async_trait]
pub trait ParticipationSource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the participation records of one activity.
    async fn participation_for_activity(&self, activity_id: i64) -> AppResult<Vec<Participation>>;
}

/// Source of evidence records.
#[async_trait]
pub trait EvidenceSource: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch every evidence record; callers filter by activity.
    async fn all_evidence(&self) -> AppResult<Vec<Evidence>>;
}

/// Remote counterpart of the notification store.
///
/// `fetch_notifications` returns raw payloads so the store can apply its
/// field-name mapping policy. A missing endpoint is reported as
/// `ErrorKind::NotFound`.
#[async_trait]
pub trait NotificationBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the current user's notifications.
    async fn fetch_notifications(&self) -> AppResult<Vec<Value>>;

    /// Mark one notification as read.
    async fn mark_read(&self, id: i64) -> AppResult<()>;

    /// Mark every notification as read.
    async fn mark_all_read(&self) -> AppResult<()>;

    /// Delete one notification.
    async fn delete_notification(&self, id: i64) -> AppResult<()>;
}
