//! Logger configuration from environment-style settings.
//!
//! Configuration is resolved once at logger construction and threaded
//! through explicitly; there is no process-wide mutable state. Two values
//! are read:
//!
//! - `LOG_LEVEL`: explicit minimum severity, numeric or name form
//! - `ENVIRONMENT`: deployment mode; development and test modes lower the
//!   default threshold to DEBUG so non-production environments see verbose
//!   output without explicit configuration

use thiserror::Error;

use crate::severity::{InvalidSeverityLevel, Severity};

/// Environment variable carrying the explicit minimum severity.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Environment variable carrying the deployment mode.
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";

/// Deployment mode of the running process.
///
/// Unset or unrecognized modes other than the development/test spellings
/// count as production: the quiet default must be opt-out, not opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development; verbose by default.
    #[default]
    Development,
    /// Automated test runs; verbose by default.
    Test,
    /// Production deployments; INFO floor by default.
    Production,
}

impl Environment {
    /// Parse a mode name, case-insensitively.
    ///
    /// `dev`/`development` and `test` select the verbose modes; any other
    /// value (including `staging`, `prod`, `production`) is production.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Environment::Development,
            "test" => Environment::Test,
            _ => Environment::Production,
        }
    }

    /// True for modes that default to the DEBUG threshold.
    pub fn is_verbose(self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// Errors raised while resolving logger settings.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The explicit minimum level is not in the severity table.
    #[error("invalid LOG_LEVEL: {0}")]
    InvalidMinLevel(#[from] InvalidSeverityLevel),
}

/// Resolved logger settings.
///
/// The effective threshold is fixed at logger construction from these
/// values; see [`LoggerSettings::threshold`].
#[derive(Debug, Clone, Default)]
pub struct LoggerSettings {
    /// Explicit minimum severity, when configured.
    pub min_level: Option<Severity>,
    /// Deployment mode.
    pub environment: Environment,
}

impl LoggerSettings {
    /// Settings with no explicit level, in the default (development) mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style explicit minimum severity.
    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Builder-style deployment mode.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMinLevel`] when `LOG_LEVEL` is set to
    /// a value outside the severity table. A bad explicit level is a
    /// deployment error and must fail construction, not silently default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an injected key lookup.
    ///
    /// Separates parsing from the process environment so the resolution
    /// rules are testable without mutating global state.
    ///
    /// # Errors
    ///
    /// Same contract as [`from_env`](Self::from_env).
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let min_level = match lookup(ENV_LOG_LEVEL) {
            Some(raw) => Some(Severity::lookup(raw)?),
            None => None,
        };
        let environment = lookup(ENV_ENVIRONMENT)
            .map(|raw| Environment::from_name(&raw))
            .unwrap_or_default();
        Ok(Self {
            min_level,
            environment,
        })
    }

    /// Effective minimum severity for a logger built from these settings.
    ///
    /// An explicit level always wins; otherwise the floor is INFO, lowered
    /// to DEBUG in development and test modes.
    pub fn threshold(&self) -> Severity {
        self.min_level.unwrap_or(if self.environment.is_verbose() {
            Severity::Debug
        } else {
            Severity::Info
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_mode_defaults_to_debug_threshold() {
        let settings =
            LoggerSettings::from_lookup(lookup_from(&[("ENVIRONMENT", "test")])).unwrap();
        assert_eq!(settings.threshold(), Severity::Debug);
    }

    #[test]
    fn prod_mode_defaults_to_info_threshold() {
        let settings =
            LoggerSettings::from_lookup(lookup_from(&[("ENVIRONMENT", "prod")])).unwrap();
        assert_eq!(settings.threshold(), Severity::Info);
    }

    #[test]
    fn unset_environment_counts_as_development() {
        let settings = LoggerSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.environment, Environment::Development);
        assert_eq!(settings.threshold(), Severity::Debug);
    }

    #[test]
    fn explicit_level_wins_over_environment_mode() {
        let settings = LoggerSettings::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "ERROR"),
            ("ENVIRONMENT", "dev"),
        ]))
        .unwrap();
        assert_eq!(settings.threshold(), Severity::Error);
    }

    #[test]
    fn numeric_log_level_is_accepted() {
        let settings =
            LoggerSettings::from_lookup(lookup_from(&[("LOG_LEVEL", "400")])).unwrap();
        assert_eq!(settings.threshold(), Severity::Warning);
    }

    #[test]
    fn invalid_log_level_fails_construction() {
        let err = LoggerSettings::from_lookup(lookup_from(&[("LOG_LEVEL", "LOUD")]))
            .unwrap_err();
        assert!(err.to_string().contains("LOG_LEVEL"));
        assert!(err.to_string().contains("LOUD"));
    }

    #[test]
    fn environment_names_parse_case_insensitively() {
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("Development"), Environment::Development);
        assert_eq!(Environment::from_name("TEST"), Environment::Test);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("staging"), Environment::Production);
    }

    #[test]
    fn builder_methods_override_defaults() {
        let settings = LoggerSettings::new()
            .with_min_level(Severity::Notice)
            .with_environment(Environment::Production);
        assert_eq!(settings.threshold(), Severity::Notice);
    }
}
