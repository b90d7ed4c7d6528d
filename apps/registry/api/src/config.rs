use core_config::{
    app_info, database::DatabaseConfig, env_parse_or_default, server::ServerConfig, AppInfo,
    ConfigError, FromEnv,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// Present when DATABASE_URL is set; otherwise the in-memory store is used
    pub database: Option<DatabaseConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
    pub registration: RegistrationConfig,
}

/// Registry-specific settings
#[derive(Clone, Debug)]
pub struct RegistrationConfig {
    /// Minimum whole-year age required to register (REGISTRATION_MINIMUM_AGE)
    pub minimum_age: u32,
}

impl FromEnv for RegistrationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            minimum_age: env_parse_or_default("REGISTRATION_MINIMUM_AGE", 18)?,
        })
    }
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let registration = RegistrationConfig::from_env()?;

        // The record store is optional: without DATABASE_URL the service
        // runs on the in-memory repository.
        let database = match std::env::var("DATABASE_URL") {
            Ok(_) => Some(DatabaseConfig::from_env()?),
            Err(_) => None,
        };

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            registration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_config_defaults_to_eighteen() {
        temp_env::with_var_unset("REGISTRATION_MINIMUM_AGE", || {
            let config = RegistrationConfig::from_env().unwrap();
            assert_eq!(config.minimum_age, 18);
        });
    }

    #[test]
    fn test_registration_config_custom_value() {
        temp_env::with_var("REGISTRATION_MINIMUM_AGE", Some("21"), || {
            let config = RegistrationConfig::from_env().unwrap();
            assert_eq!(config.minimum_age, 21);
        });
    }

    #[test]
    fn test_registration_config_invalid_value() {
        temp_env::with_var("REGISTRATION_MINIMUM_AGE", Some("adult"), || {
            let result = RegistrationConfig::from_env();
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(err.to_string().contains("REGISTRATION_MINIMUM_AGE"));
        });
    }
}
