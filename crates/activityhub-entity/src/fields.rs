//! Ordered-candidate field lookup for backend payloads.
//!
//! The backend serializes the same record with either camelCase or
//! PascalCase keys depending on the endpoint. Every mapped field declares
//! its candidate keys in priority order and the first non-null value wins.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

/// Candidate keys for one logical field, highest priority first.
pub type Candidates = &'static [&'static str];

/// Return the first non-null value among `candidates`.
pub fn pick<'a>(obj: &'a Map<String, Value>, candidates: Candidates) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

/// Integer field. Accepts JSON numbers and numeric strings.
pub fn pick_i64(obj: &Map<String, Value>, candidates: Candidates) -> Option<i64> {
    match pick(obj, candidates)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String field. Numbers and booleans are rendered to text.
pub fn pick_string(obj: &Map<String, Value>, candidates: Candidates) -> Option<String> {
    match pick(obj, candidates)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Boolean field. Accepts `true`/`false`, `0`/`1` and their string forms.
pub fn pick_bool(obj: &Map<String, Value>, candidates: Candidates) -> Option<bool> {
    match pick(obj, candidates)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|v| v != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Timestamp field. Accepts RFC 3339 and zone-less ISO strings (read as UTC).
pub fn pick_datetime(obj: &Map<String, Value>, candidates: Candidates) -> Option<DateTime<Utc>> {
    let raw = pick(obj, candidates)?.as_str()?;
    parse_datetime(raw)
}

/// Calendar date field. Any time-of-day component is truncated.
pub fn pick_date(obj: &Map<String, Value>, candidates: Candidates) -> Option<NaiveDate> {
    let raw = pick(obj, candidates)?.as_str()?;
    parse_date(raw)
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_naive_datetime(raw).map(|naive| naive.and_utc())
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    parse_naive_datetime(raw).map(|dt| dt.date())
}
