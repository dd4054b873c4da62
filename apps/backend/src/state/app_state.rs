use db_bootstrap::DbHandles;
use sea_orm::DatabaseConnection;
use sqlx::PgPool;

/// Application state containing shared resources.
///
/// Built once at startup and handed to every consumer that needs the database.
#[derive(Debug, Clone)]
pub struct AppState {
    db: DbHandles,
}

impl AppState {
    pub fn new(db: DbHandles) -> Self {
        Self { db }
    }

    pub fn handles(&self) -> &DbHandles {
        &self.db
    }

    /// Raw SQL handle
    pub fn sql(&self) -> &PgPool {
        self.db.sql()
    }

    /// ORM handle
    pub fn db(&self) -> &DatabaseConnection {
        self.db.db()
    }
}
