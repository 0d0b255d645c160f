use crate::error::LogError;
use crate::store::{LogRepository, Store};
use crate::types::{LogFilter, LogQuery, LogRecord, NewDocument, NewLog, Timestamp};
use serde_json::Value;

pub const DEFAULT_LIMIT: i64 = 100;

/// Facade over the store exposing the two log operations. Stateless: every
/// call is an independent transaction against the underlying collection.
pub struct Logwell<S: Store> {
    store: S,
}

impl<S: Store> Logwell<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates one candidate record, applies defaults, and writes exactly
    /// one document. Returns the store-assigned id.
    pub fn ingest(&self, input: NewLog) -> Result<String, LogError> {
        let message = match input.message {
            Some(message) if !message.is_empty() => message,
            _ => {
                return Err(LogError::InvalidInput {
                    message: "`message` is required".to_string(),
                });
            }
        };

        let doc = NewDocument {
            level: input.level.unwrap_or_else(|| "info".to_string()),
            message,
            meta: input.meta.unwrap_or_else(|| Value::Object(Default::default())),
            timestamp: match input.timestamp {
                Some(value) => Timestamp::parse(&value),
                None => Timestamp::now(),
            },
        };
        self.store.logs().insert(doc)
    }

    /// Translates the query parameters into a filter and returns matching
    /// records newest-first, at most `limit` of them. Read-only. An
    /// empty-string parameter counts as absent, same as an omitted one.
    pub fn query(&self, params: LogQuery) -> Result<Vec<LogRecord>, LogError> {
        let filter = LogFilter {
            level: params.level.filter(|level| !level.is_empty()),
            start: present(params.start.as_deref()).map(Timestamp::parse),
            end: present(params.end.as_deref()).map(Timestamp::parse),
        };
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        self.store.logs().find(&filter, limit)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
