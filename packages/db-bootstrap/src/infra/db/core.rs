use std::str::FromStr;

use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::{debug, info};

use crate::config::db::DbConfig;
use crate::config::driver::DriverSettings;
use crate::context::DbHandles;
use crate::error::DbBootstrapError;

/// Parse the connection string and apply the driver settings on top of it.
///
/// Parsing is left to the driver; a malformed string comes back as
/// [`DbBootstrapError::Driver`] with the driver's own error inside.
pub fn build_connect_options(config: &DbConfig) -> Result<PgConnectOptions, DbBootstrapError> {
    let options = PgConnectOptions::from_str(config.database_url.expose())?;
    Ok(apply_settings(options, &config.driver))
}

fn apply_settings(mut options: PgConnectOptions, settings: &DriverSettings) -> PgConnectOptions {
    if let Some(endpoint) = settings.endpoint {
        options = options.host(endpoint.host).port(endpoint.port);
    }
    if !settings.secure_transport {
        options = options.ssl_mode(PgSslMode::Disable);
    }
    if settings.stateless_queries {
        options = options.statement_cache_capacity(0);
    }
    options
}

/// Build the raw SQL handle.
///
/// The pool is created lazily: no connection is opened here, so an
/// unreachable endpoint only surfaces on first use. Must be called from
/// within a Tokio runtime.
pub fn connect_sql(config: &DbConfig) -> Result<PgPool, DbBootstrapError> {
    let options = build_connect_options(config)?;
    debug!(
        host = %options.get_host(),
        port = options.get_port(),
        "constructing sql pool"
    );
    Ok(PgPoolOptions::new().connect_lazy_with(options))
}

/// Wrap an existing pool in a SeaORM connection. The pool is shared, not copied.
pub fn wrap_orm(pool: &PgPool) -> DatabaseConnection {
    SqlxPostgresConnector::from_sqlx_postgres_pool(pool.clone())
}

/// Produce the sql and orm handles for `config`.
///
/// Not idempotent: every call builds a fresh pool. Use
/// [`crate::global::init_global`] for a once-per-process instance.
pub fn initialize(config: &DbConfig) -> Result<DbHandles, DbBootstrapError> {
    let endpoint = config
        .driver
        .endpoint
        .map(|e| e.to_string())
        .unwrap_or_else(|| "default".to_string());

    info!(
        env = %config.env,
        endpoint = %endpoint,
        secure_transport = config.driver.secure_transport,
        stateless_queries = config.driver.stateless_queries,
        url = %config.database_url.redacted(),
        "bootstrapping database handles"
    );

    let sql = connect_sql(config)?;
    let db = wrap_orm(&sql);
    debug!("orm connection wraps sql pool");

    Ok(DbHandles::new(config.env, config.driver.clone(), sql, db))
}
