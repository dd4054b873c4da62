//! Database connection bootstrap.
//!
//! Turns the process environment into a typed [`DbConfig`], applies the
//! environment's driver settings, and produces the two database handles the
//! rest of the application shares: a raw `sqlx` pool and a SeaORM connection
//! wrapping that same pool.

pub mod config;
pub mod context;
pub mod error;
pub mod global;
pub mod infra;

#[cfg(test)]
pub mod test_bootstrap;

pub use config::db::{load_runtime_env, DatabaseUrl, DbConfig, DATABASE_URL_VAR, MODE_VAR};
pub use config::driver::{DriverSettings, Endpoint, LOCAL_ENDPOINT};
pub use config::env::RuntimeEnv;
pub use context::DbHandles;
pub use error::DbBootstrapError;
pub use global::init_global;
pub use infra::db::{build_connect_options, connect_sql, initialize, wrap_orm};
