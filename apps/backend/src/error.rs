use db_bootstrap::DbBootstrapError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error(transparent)]
    Bootstrap(#[from] DbBootstrapError),
    #[error("Database error: {detail}")]
    Db { detail: String },
}

impl AppError {
    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn db(detail: String) -> Self {
        Self::Db { detail }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::db(format!("sql error: {e}"))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("orm error: {e}"))
    }
}
