use lw_core::store::Store;
use rusqlite::Connection;

use crate::log_repo::LogRepo;

pub struct DbStore {
    conn: Connection,
}

impl DbStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Store for DbStore {
    type Logs<'a>
        = LogRepo<'a>
    where
        Self: 'a;

    fn logs(&self) -> Self::Logs<'_> {
        LogRepo::new(&self.conn)
    }
}
