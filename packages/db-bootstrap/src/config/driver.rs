use std::fmt;

use crate::config::env::RuntimeEnv;

/// Address of the local database proxy used in development.
pub const LOCAL_ENDPOINT: Endpoint = Endpoint {
    host: "neon-local",
    port: 5432,
};

/// Host/port pair that replaces whatever the connection string points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub host: &'static str,
    pub port: u16,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Driver-level knobs applied to the connect options before the pool is built.
///
/// This is a plain value handed to the connection factory; nothing here is
/// process-global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSettings {
    /// Overrides host and port from the connection string
    pub endpoint: Option<Endpoint>,
    /// When false, TLS is disabled (`sslmode=disable`)
    pub secure_transport: bool,
    /// When true, no prepared statements are cached; every query is a
    /// self-contained round trip
    pub stateless_queries: bool,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            secure_transport: true,
            stateless_queries: false,
        }
    }
}

impl DriverSettings {
    /// Settings for the given environment. Only development deviates from the defaults.
    pub fn for_env(env: RuntimeEnv) -> Self {
        match env {
            RuntimeEnv::Development => Self {
                endpoint: Some(LOCAL_ENDPOINT),
                secure_transport: false,
                stateless_queries: true,
            },
            RuntimeEnv::Prod => Self::default(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
