use crate::util::{decode_json, encode_json};
use lw_core::error::LogError;
use lw_core::store::LogRepository;
use lw_core::types::{LogFilter, LogRecord, NewDocument, Timestamp};
use rusqlite::Connection;
use ulid::Ulid;

pub struct LogRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> LogRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl<'a> LogRepository for LogRepo<'a> {
    fn insert(&self, doc: NewDocument) -> Result<String, LogError> {
        let id = format!("log_{}", Ulid::new());
        let sql = "INSERT INTO logs (id, level, message, meta_json, timestamp) VALUES (?1, ?2, ?3, ?4, ?5)";
        let params = (
            id.clone(),
            doc.level,
            doc.message,
            encode_json(&doc.meta).map_err(LogError::store)?,
            doc.timestamp.storage_key(),
        );
        self.conn.execute(sql, params).map_err(LogError::store)?;
        Ok(id)
    }

    fn find(&self, filter: &LogFilter, limit: i64) -> Result<Vec<LogRecord>, LogError> {
        let mut sql = "SELECT id, level, message, meta_json, timestamp FROM logs".to_string();
        let mut predicates = Vec::new();
        let mut values: Vec<rusqlite::types::Value> = Vec::new();

        if let Some(level) = &filter.level {
            values.push(level.clone().into());
            predicates.push(format!("level = ?{}", values.len()));
        }
        if let Some(start) = &filter.start {
            values.push(start.storage_key().into());
            predicates.push(format!("timestamp >= ?{}", values.len()));
        }
        if let Some(end) = &filter.end {
            values.push(end.storage_key().into());
            predicates.push(format!("timestamp <= ?{}", values.len()));
        }
        if !predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }
        sql.push_str(&format!(" ORDER BY timestamp DESC LIMIT ?{}", values.len() + 1));
        values.push(limit.into());

        let mut stmt = self.conn.prepare(&sql).map_err(LogError::store)?;
        let mut rows = stmt
            .query(rusqlite::params_from_iter(values))
            .map_err(LogError::store)?;
        let mut logs = Vec::new();
        while let Some(row) = rows.next().map_err(LogError::store)? {
            logs.push(map_log_row(row)?);
        }
        Ok(logs)
    }
}

fn map_log_row(row: &rusqlite::Row<'_>) -> Result<LogRecord, LogError> {
    let id: String = row.get(0).map_err(LogError::store)?;
    let level: String = row.get(1).map_err(LogError::store)?;
    let message: String = row.get(2).map_err(LogError::store)?;
    let meta_json: String = row.get(3).map_err(LogError::store)?;
    let timestamp: String = row.get(4).map_err(LogError::store)?;

    Ok(LogRecord {
        id,
        level,
        message,
        meta: decode_json(&meta_json).map_err(LogError::store)?,
        timestamp: Timestamp::parse(&timestamp),
    })
}
