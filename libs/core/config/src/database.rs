use crate::{env_required, ConfigError, FromEnv};

/// PostgreSQL connection settings.
///
/// `DATABASE_URL` has no default: a deployment either configures a real
/// database or the application decides to run without one.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl FromEnv for DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        env_required("DATABASE_URL").map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_database_url() {
        temp_env::with_var("DATABASE_URL", Some("postgres://localhost/registry"), || {
            let config = DatabaseConfig::from_env().unwrap();
            assert_eq!(config.url, "postgres://localhost/registry");
        });
    }

    #[test]
    fn test_missing_database_url_is_an_error() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = DatabaseConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }
}
