//! Activity entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{self, Candidates};

const ID: Candidates = &["idActividad", "IdActividad", "id", "Id"];
const NAME: Candidates = &["nombre", "Nombre", "name", "Name"];
const START: Candidates = &["fechaInicio", "FechaInicio", "startDate", "StartDate"];
const END: Candidates = &["fechaFin", "FechaFin", "endDate", "EndDate"];

/// A scheduled activity. Only the fields the rules read are modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// First day of the activity, if scheduled.
    pub start_date: Option<NaiveDate>,
    /// Last day of the activity, if scheduled.
    pub end_date: Option<NaiveDate>,
}

impl Activity {
    /// Create an activity with no dates.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            start_date: None,
            end_date: None,
        }
    }

    /// Set the start date.
    pub fn starting(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the end date.
    pub fn ending(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Map one backend record. Records without an id are rejected.
    pub fn from_backend(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            id: fields::pick_i64(obj, ID)?,
            name: fields::pick_string(obj, NAME).unwrap_or_default(),
            start_date: fields::pick_date(obj, START),
            end_date: fields::pick_date(obj, END),
        })
    }
}
