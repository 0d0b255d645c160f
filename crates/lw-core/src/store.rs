use crate::error::LogError;
use crate::types::{LogFilter, LogRecord, NewDocument};

/// One named collection of log documents: insert-one returning the generated
/// id, and find with filter, descending timestamp sort, and limit.
pub trait LogRepository {
    fn insert(&self, doc: NewDocument) -> Result<String, LogError>;
    fn find(&self, filter: &LogFilter, limit: i64) -> Result<Vec<LogRecord>, LogError>;
}

pub trait Store {
    type Logs<'a>: LogRepository
    where
        Self: 'a;

    fn logs(&self) -> Self::Logs<'_>;
}
