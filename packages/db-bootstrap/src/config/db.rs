use std::env;
use std::fmt;

use crate::config::driver::DriverSettings;
use crate::config::env::RuntimeEnv;
use crate::error::DbBootstrapError;

/// Variable selecting the runtime environment
pub const MODE_VAR: &str = "APP_ENV";
/// Variable holding the Postgres connection string
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Opaque connection string. Its format belongs to the driver; this type only
/// keeps the password out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseUrl(String);

impl DatabaseUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The raw connection string, credentials included.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Connection string with the password masked, for logging.
    ///
    /// Covers both places the driver accepts a password: the userinfo part
    /// and a `password=` query parameter.
    pub fn redacted(&self) -> String {
        let (scheme, rest) = match self.0.split_once("://") {
            Some((scheme, rest)) => (Some(scheme), rest),
            None => (None, self.0.as_str()),
        };
        let (base, query) = match rest.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (rest, None),
        };

        let mut masked = match base.rsplit_once('@') {
            Some((auth, host)) => match auth.split_once(':') {
                Some((user, _)) => format!("{user}:***@{host}"),
                None => base.to_string(),
            },
            None => base.to_string(),
        };

        if let Some(query) = query {
            let pairs: Vec<String> = query
                .split('&')
                .map(|pair| match pair.split_once('=') {
                    Some((key, _)) if key.eq_ignore_ascii_case("password") => {
                        format!("{key}=***")
                    }
                    _ => pair.to_string(),
                })
                .collect();
            masked.push('?');
            masked.push_str(&pairs.join("&"));
        }

        match scheme {
            Some(scheme) => format!("{scheme}://{masked}"),
            None => masked,
        }
    }
}

impl fmt::Debug for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DatabaseUrl").field(&self.redacted()).finish()
    }
}

/// Everything the bootstrap needs, resolved once before any handle is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub env: RuntimeEnv,
    pub database_url: DatabaseUrl,
    pub driver: DriverSettings,
}

impl DbConfig {
    /// Config for an explicit environment and URL; driver settings follow the environment.
    pub fn new(env: RuntimeEnv, database_url: DatabaseUrl) -> Self {
        Self {
            env,
            database_url,
            driver: DriverSettings::for_env(env),
        }
    }

    /// Load from the process environment, reading `.env` first when one exists.
    pub fn from_env() -> Result<Self, DbBootstrapError> {
        Self::from_env_in(load_runtime_env())
    }

    /// Load the remaining settings from the process environment for an
    /// already-resolved runtime environment. `APP_ENV` is not read again.
    pub fn from_env_in(mode: RuntimeEnv) -> Result<Self, DbBootstrapError> {
        dotenvy::dotenv().ok();
        Self::from_lookup_in(mode, |name| env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbBootstrapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = RuntimeEnv::from_mode(lookup(MODE_VAR).as_deref());
        Self::from_lookup_in(mode, lookup)
    }

    /// Load through an arbitrary lookup for an already-resolved runtime environment.
    pub fn from_lookup_in<F>(mode: RuntimeEnv, lookup: F) -> Result<Self, DbBootstrapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = must_var(&lookup, DATABASE_URL_VAR)?;
        Ok(Self::new(mode, DatabaseUrl::new(database_url)))
    }
}

/// Resolve the runtime environment from `APP_ENV`, reading `.env` first when one exists.
///
/// Call once at startup and hand the result to [`DbConfig::from_env_in`].
pub fn load_runtime_env() -> RuntimeEnv {
    dotenvy::dotenv().ok();
    RuntimeEnv::from_mode(env::var(MODE_VAR).ok().as_deref())
}

/// Get a required, non-empty variable or return a config error naming it
fn must_var<F>(lookup: &F, name: &str) -> Result<String, DbBootstrapError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(DbBootstrapError::config(format!(
            "Environment variable '{name}' is set but empty"
        ))),
        None => Err(DbBootstrapError::config(format!(
            "Required environment variable '{name}' is not set"
        ))),
    }
}
