use std::fmt;

/// Runtime environment the process was started in.
///
/// Only the exact value `development` selects [`RuntimeEnv::Development`];
/// every other value, including an unset variable, is treated as `Prod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    /// Local stack: talks to the local database proxy without TLS
    Development,
    /// Anything else: driver defaults
    Prod,
}

impl RuntimeEnv {
    pub fn from_mode(mode: Option<&str>) -> Self {
        match mode {
            Some("development") => RuntimeEnv::Development,
            _ => RuntimeEnv::Prod,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, RuntimeEnv::Development)
    }
}

impl fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeEnv::Development => f.write_str("development"),
            RuntimeEnv::Prod => f.write_str("prod"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RuntimeEnv;

    #[test]
    fn test_exact_development_literal() {
        assert_eq!(
            RuntimeEnv::from_mode(Some("development")),
            RuntimeEnv::Development
        );
    }

    #[test]
    fn test_other_values_are_prod() {
        for mode in ["production", "test", "", "Development", " development", "dev"] {
            assert_eq!(
                RuntimeEnv::from_mode(Some(mode)),
                RuntimeEnv::Prod,
                "mode {mode:?} should not select development"
            );
        }
    }

    #[test]
    fn test_unset_is_prod() {
        assert_eq!(RuntimeEnv::from_mode(None), RuntimeEnv::Prod);
        assert!(!RuntimeEnv::Prod.is_development());
    }

    #[test]
    fn test_display() {
        assert_eq!(RuntimeEnv::Development.to_string(), "development");
        assert_eq!(RuntimeEnv::Prod.to_string(), "prod");
    }
}
