use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbBootstrapError {
    #[error("Configuration error: {message}")]
    Config { message: String },
    /// Raised by the driver itself (unparseable URL, connect failure, ...).
    /// Carried through untouched so callers see the driver's own diagnostic.
    #[error(transparent)]
    Driver(#[from] sqlx::Error),
    #[error("Database handles have not been initialized")]
    NotInitialized,
}

impl DbBootstrapError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
