use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Storage backend, derived from the DATABASE_URL scheme. One binary serves
/// both the embedded-file and the server-based deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Sqlite,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub backend: StorageBackend,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_minutes: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            security: SecurityConfig::from_env(),
        })
    }
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        Self { port }
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let backend = Self::backend_for(&url)?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(5);
        Ok(Self { url, backend, max_connections })
    }

    pub fn backend_for(url: &str) -> Result<StorageBackend, ConfigError> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}

impl SecurityConfig {
    fn from_env() -> Self {
        // Default secret matches the original deployment; override in any
        // environment that leaves /jwt reachable.
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| "my_secret_key".to_string());
        let jwt_expiry_minutes = env::var("JWT_EXPIRY_MINUTES")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(100);
        Self { jwt_secret, jwt_expiry_minutes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_from_postgres_url() {
        let backend = DatabaseConfig::backend_for("postgres://localhost/words").unwrap();
        assert_eq!(backend, StorageBackend::Postgres);
        let backend = DatabaseConfig::backend_for("postgresql://localhost/words").unwrap();
        assert_eq!(backend, StorageBackend::Postgres);
    }

    #[test]
    fn backend_from_sqlite_url() {
        let backend = DatabaseConfig::backend_for("sqlite://words.db").unwrap();
        assert_eq!(backend, StorageBackend::Sqlite);
        let backend = DatabaseConfig::backend_for("sqlite::memory:").unwrap();
        assert_eq!(backend, StorageBackend::Sqlite);
    }

    #[test]
    fn backend_from_unknown_scheme_is_rejected() {
        let err = DatabaseConfig::backend_for("mysql://localhost/words").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(s) if s == "mysql"));
    }
}
