use db_bootstrap::{initialize, DbConfig, RuntimeEnv};

use crate::error::AppError;
use crate::state::app_state::AppState;

pub const ERR_MISSING_CONFIG: &str = "no database config supplied to StateBuilder";

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_config: Option<DbConfig>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db_config: None }
    }

    pub fn with_config(mut self, config: DbConfig) -> Self {
        self.db_config = Some(config);
        self
    }

    /// Load the database config from the process environment for an
    /// already-resolved runtime environment.
    pub fn with_env_config(self, env: RuntimeEnv) -> Result<Self, AppError> {
        Ok(self.with_config(DbConfig::from_env_in(env)?))
    }

    /// Bootstrap the database handles. Must run inside a Tokio runtime.
    pub fn build(self) -> Result<AppState, AppError> {
        let config = self
            .db_config
            .ok_or_else(|| AppError::config(ERR_MISSING_CONFIG.to_string()))?;
        let handles = initialize(&config)?;
        Ok(AppState::new(handles))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fails_without_config() {
        let err = build_state().build().unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains(ERR_MISSING_CONFIG));
    }
}
