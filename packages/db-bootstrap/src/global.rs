//! Optional once-per-process handles.
//!
//! Prefer passing [`DbHandles`] explicitly. This module exists for code that
//! cannot be handed a context and still needs the process's single instance.

use once_cell::sync::OnceCell;
use sea_orm::DatabaseConnection;
use sqlx::PgPool;

use crate::config::db::DbConfig;
use crate::context::DbHandles;
use crate::error::DbBootstrapError;
use crate::infra::db::initialize;

static HANDLES: OnceCell<DbHandles> = OnceCell::new();

/// Initialize the process-wide handles, or return the existing ones.
///
/// Only the first successful call builds anything; later calls ignore
/// `config`. A failed attempt leaves nothing behind, so it can be retried.
pub fn init_global(config: &DbConfig) -> Result<&'static DbHandles, DbBootstrapError> {
    HANDLES.get_or_try_init(|| initialize(config))
}

pub fn global() -> Option<&'static DbHandles> {
    HANDLES.get()
}

/// Process-wide raw SQL handle
pub fn sql() -> Result<&'static PgPool, DbBootstrapError> {
    global()
        .map(DbHandles::sql)
        .ok_or(DbBootstrapError::NotInitialized)
}

/// Process-wide ORM handle
pub fn db() -> Result<&'static DatabaseConnection, DbBootstrapError> {
    global()
        .map(DbHandles::db)
        .ok_or(DbBootstrapError::NotInitialized)
}
