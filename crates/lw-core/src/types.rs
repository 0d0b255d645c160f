use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// A point in time as supplied by a caller. Unparseable inputs are kept
/// verbatim rather than rejected, so whatever the caller sent round-trips
/// back out of the query endpoint unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Timestamp {
    Instant(DateTime<Utc>),
    Raw(String),
}

impl Timestamp {
    pub fn parse(value: &str) -> Self {
        match DateTime::parse_from_rfc3339(value) {
            Ok(dt) => Timestamp::Instant(dt.with_timezone(&Utc)),
            Err(_) => Timestamp::Raw(value.to_string()),
        }
    }

    pub fn now() -> Self {
        Timestamp::Instant(Utc::now())
    }

    /// Fixed-width encoding used as the stored column value. Millisecond
    /// precision with a `Z` suffix keeps lexicographic order equal to
    /// chronological order for valid instants; raw values pass through.
    pub fn storage_key(&self) -> String {
        match self {
            Timestamp::Instant(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            Timestamp::Raw(raw) => raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LogRecord {
    pub id: String,
    pub level: String,
    pub message: String,
    #[schema(value_type = Object)]
    pub meta: Value,
    pub timestamp: Timestamp,
}

/// Candidate record as posted by a caller. Only `message` is required;
/// everything else is defaulted at ingest time.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewLog {
    pub level: Option<String>,
    pub message: Option<String>,
    #[schema(value_type = Object)]
    pub meta: Option<Value>,
    pub timestamp: Option<String>,
}

/// Validated, fully-defaulted document ready to be written. The store
/// assigns the id.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub level: String,
    pub message: String,
    pub meta: Value,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct LogQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub level: Option<String>,
    #[serde(default, deserialize_with = "limit_or_absent")]
    #[param(value_type = Option<i64>)]
    #[schema(value_type = Option<i64>)]
    pub limit: Option<i64>,
}

/// `limit=` in a query string arrives as an empty string; it means the same
/// as leaving the parameter off entirely.
fn limit_or_absent<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub level: Option<String>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_rfc3339_normalizes_to_utc() {
        let ts = Timestamp::parse("2025-11-17T19:15:08.066+02:00");
        assert_eq!(ts.storage_key(), "2025-11-17T17:15:08.066Z");
    }

    #[test]
    fn parse_garbage_keeps_raw_string() {
        let ts = Timestamp::parse("not-a-date");
        assert_eq!(ts, Timestamp::Raw("not-a-date".to_string()));
        assert_eq!(ts.storage_key(), "not-a-date");
    }

    #[test]
    fn raw_timestamp_serializes_verbatim() {
        let json = serde_json::to_value(Timestamp::Raw("later".to_string())).unwrap();
        assert_eq!(json, serde_json::json!("later"));
    }

    #[test]
    fn instant_deserializes_from_rfc3339_string() {
        let ts: Timestamp = serde_json::from_value(serde_json::json!("2025-01-02T03:04:05Z")).unwrap();
        assert!(matches!(ts, Timestamp::Instant(_)));
    }
}
