pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod static_files;

use axum::Router;
use lw_core::{LogError, Logwell};
use lw_db::store::DbStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, OnceCell};

#[derive(Clone)]
pub struct AppState {
    db_path: String,
    db: Arc<OnceCell<Mutex<Logwell<DbStore>>>>,
}

impl AppState {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            db: Arc::new(OnceCell::new()),
        }
    }

    /// Process-wide store handle. The connection is opened lazily on first
    /// use and reused by every in-flight request afterwards; the first
    /// caller wins and everyone else awaits the same initialization.
    pub async fn database(&self) -> Result<&Mutex<Logwell<DbStore>>, LogError> {
        self.db
            .get_or_try_init(|| async {
                let conn =
                    lw_db::schema::open_and_migrate(&self.db_path).map_err(LogError::store)?;
                Ok(Mutex::new(Logwell::new(DbStore::new(conn))))
            })
            .await
    }
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await
}
