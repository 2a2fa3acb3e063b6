//! Mapping of backend notification payloads.

use chrono::Utc;
use serde_json::Value;

use activityhub_core::types::NotificationKind;

use super::model::Notification;
use crate::fields::{self, Candidates};

const ID: Candidates = &["id", "Id"];
const TITLE: Candidates = &["title", "Title"];
const MESSAGE: Candidates = &["message", "Message"];
const KIND: Candidates = &["type", "Type"];
const TIMESTAMP: Candidates = &["timestamp", "Timestamp"];
const READ: Candidates = &["read", "Read"];
const TARGET: Candidates = &["url", "Url"];

impl Notification {
    /// Map one backend record. Returns `None` when the payload is not an object.
    ///
    /// Missing `type` maps to [`NotificationKind::Info`], missing timestamp to now.
    pub fn from_backend(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        Some(Self {
            id: fields::pick_i64(obj, ID).unwrap_or(0),
            title: fields::pick_string(obj, TITLE).unwrap_or_default(),
            message: fields::pick_string(obj, MESSAGE).unwrap_or_default(),
            kind: fields::pick_string(obj, KIND)
                .map(|s| NotificationKind::from_str_value(&s))
                .unwrap_or_default(),
            timestamp: fields::pick_datetime(obj, TIMESTAMP).unwrap_or_else(Utc::now),
            read: fields::pick_bool(obj, READ).unwrap_or(false),
            navigation_target: fields::pick_string(obj, TARGET).filter(|s| !s.is_empty()),
        })
    }

    /// Map a backend list, skipping records that are not objects.
    pub fn from_backend_list(values: &[Value]) -> Vec<Self> {
        values
            .iter()
            .filter_map(|value| {
                let mapped = Self::from_backend(value);
                if mapped.is_none() {
                    tracing::warn!("Skipping malformed notification payload: {}", value);
                }
                mapped
            })
            .collect()
    }
}
