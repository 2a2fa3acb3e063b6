//! Evidence record model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{self, Candidates};

const ID: Candidates = &["idEvidencia", "IdEvidencia", "id", "Id"];
const ACTIVITY: Candidates = &["idActividad", "IdActividad", "activityId", "ActivityId"];

/// Evidence (photos, documents) attached to an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Backend identifier.
    pub id: i64,
    /// Activity the evidence documents; `None` when the backend omits it.
    pub activity_id: Option<i64>,
}

impl Evidence {
    /// Map one backend record.
    pub fn from_backend(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            id: fields::pick_i64(obj, ID).unwrap_or(0),
            activity_id: fields::pick_i64(obj, ACTIVITY),
        })
    }

    /// Whether this evidence belongs to `activity_id`.
    pub fn belongs_to(&self, activity_id: i64) -> bool {
        self.activity_id == Some(activity_id)
    }
}
