pub mod database;
pub mod server;
pub mod tracing;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while assembling configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Deployment environment, selected via `APP_ENV`.
///
/// Anything other than "production" (case-insensitive) is treated as
/// development, including an unset variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Static application metadata, resolved at compile time by [`app_info!`].
#[derive(Clone, Copy, Debug)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Configuration sections that know how to load themselves from the
/// environment.
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Read an environment variable, falling back to `default` when unset.
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read an environment variable that must be present.
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Read and parse an environment variable, falling back to `default` when
/// unset. Set-but-unparseable values are an error, not a silent fallback.
pub fn env_parse_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_environment_production_any_case() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                let env = Environment::from_env();
                assert!(env.is_production());
                assert!(!env.is_development());
            });
        }
    }

    #[test]
    fn test_environment_unknown_value_is_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("SOME_VAR", Some("set"), || {
            assert_eq!(env_or_default("SOME_VAR", "fallback"), "set");
        });
        temp_env::with_var_unset("SOME_VAR", || {
            assert_eq!(env_or_default("SOME_VAR", "fallback"), "fallback");
        });
    }

    #[test]
    fn test_env_required_present_and_missing() {
        temp_env::with_var("NEEDED_VAR", Some("value"), || {
            assert_eq!(env_required("NEEDED_VAR").unwrap(), "value");
        });
        temp_env::with_var_unset("NEEDED_VAR", || {
            let err = env_required("NEEDED_VAR").unwrap_err();
            assert!(err.to_string().contains("NEEDED_VAR"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_parse_or_default_unset_uses_default() {
        temp_env::with_var_unset("NUMERIC_VAR", || {
            assert_eq!(env_parse_or_default("NUMERIC_VAR", 42u32).unwrap(), 42);
        });
    }

    #[test]
    fn test_env_parse_or_default_parses_set_value() {
        temp_env::with_var("NUMERIC_VAR", Some("7"), || {
            assert_eq!(env_parse_or_default("NUMERIC_VAR", 42u32).unwrap(), 7);
        });
    }

    #[test]
    fn test_env_parse_or_default_rejects_garbage() {
        temp_env::with_var("NUMERIC_VAR", Some("forty-two"), || {
            let err = env_parse_or_default("NUMERIC_VAR", 42u32).unwrap_err();
            assert!(err.to_string().contains("NUMERIC_VAR"));
        });
    }

    #[test]
    fn test_app_info_macro() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }
}
