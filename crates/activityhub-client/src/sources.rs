//! Collaborator trait implementations for [`BackendClient`].

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use activityhub_core::result::AppResult;
use activityhub_entity::{Activity, Evidence, Participation};
use activityhub_notify::sources::{
    ActivitySource, EvidenceSource, NotificationBackend, ParticipationSource,
};

use crate::client::{
    ACTIVITIES_PATH, BackendClient, EVIDENCE_PATH, MARK_ALL_READ_PATH, NOTIFICATIONS_PATH,
    mark_read_path, notification_path, participation_path,
};

fn map_records<T>(raw: &[Value], what: &str, map: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    raw.iter()
        .filter_map(|value| {
            let mapped = map(value);
            if mapped.is_none() {
                tracing::warn!("Skipping malformed {} payload: {}", what, value);
            }
            mapped
        })
        .collect()
}

#[async_trait]
impl ActivitySource for BackendClient {
    async fn activities(&self) -> AppResult<Vec<Activity>> {
        let raw = self.get_list_or_empty(ACTIVITIES_PATH).await?;
        Ok(map_records(&raw, "activity", Activity::from_backend))
    }
}

#[async_trait]
impl ParticipationSource for BackendClient {
    async fn participation_for_activity(&self, activity_id: i64) -> AppResult<Vec<Participation>> {
        let raw = self
            .get_list_or_empty(&participation_path(activity_id))
            .await?;
        Ok(map_records(&raw, "participation", Participation::from_backend))
    }
}

#[async_trait]
impl EvidenceSource for BackendClient {
    async fn all_evidence(&self) -> AppResult<Vec<Evidence>> {
        let raw = self.get_list_or_empty(EVIDENCE_PATH).await?;
        Ok(map_records(&raw, "evidence", Evidence::from_backend))
    }
}

#[async_trait]
impl NotificationBackend for BackendClient {
    async fn fetch_notifications(&self) -> AppResult<Vec<Value>> {
        Ok(self.get_list(NOTIFICATIONS_PATH).await?)
    }

    async fn mark_read(&self, id: i64) -> AppResult<()> {
        Ok(self.send_empty(Method::PUT, &mark_read_path(id)).await?)
    }

    async fn mark_all_read(&self) -> AppResult<()> {
        Ok(self.send_empty(Method::PUT, MARK_ALL_READ_PATH).await?)
    }

    async fn delete_notification(&self, id: i64) -> AppResult<()> {
        Ok(self
            .send_empty(Method::DELETE, &notification_path(id))
            .await?)
    }
}
