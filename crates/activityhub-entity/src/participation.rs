//! Participation record model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{self, Candidates};

const ID: Candidates = &["idParticipacion", "IdParticipacion", "id", "Id"];
const ACTIVITY: Candidates = &["idActividad", "IdActividad", "activityId", "ActivityId"];

/// A person's participation in an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    /// Backend identifier.
    pub id: i64,
    /// Activity the record belongs to.
    pub activity_id: i64,
}

impl Participation {
    /// Map one backend record.
    pub fn from_backend(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            id: fields::pick_i64(obj, ID).unwrap_or(0),
            activity_id: fields::pick_i64(obj, ACTIVITY).unwrap_or(0),
        })
    }
}
