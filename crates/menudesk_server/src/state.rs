//! Shared handler state.
//!
//! # Responsibility
//! - Carry the database location into handlers.
//! - Run one core service call per request on the blocking pool.
//!
//! # Invariants
//! - Each call opens its own migrated connection; connections are never
//!   shared across requests.

use crate::error::ApiError;
use menudesk_core::db::open_db;
use menudesk_core::{MenuService, MenuServiceResult, SqliteMenuRepository};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    db_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Arc::new(db_path.into()),
        }
    }

    /// Opens the store, builds a service, and runs `f` off the async runtime.
    pub async fn with_menu_service<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&MenuService<SqliteMenuRepository<'_>>) -> MenuServiceResult<T>
            + Send
            + 'static,
    {
        let db_path = Arc::clone(&self.db_path);
        tokio::task::spawn_blocking(move || {
            let conn = open_db(db_path.as_path())?;
            let repo = SqliteMenuRepository::try_new(&conn)?;
            let service = MenuService::new(repo);
            f(&service).map_err(ApiError::from)
        })
        .await
        .map_err(|err| ApiError::internal(format!("menu task failed: {err}")))?
    }
}
