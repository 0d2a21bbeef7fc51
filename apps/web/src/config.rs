//! Web application configuration.
//!
//! Layered with the `config` crate, later layers win:
//!
//! ```text
//! built-in defaults ──► ./apex.toml (optional) ──► APEX_* environment
//! ```
//!
//! e.g. `APEX_DATABASE_URL=sqlite://data/apex.db APEX_PORT=3000`.

use apex_db::DbConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

/// Name of the optional config file (any supported extension, e.g. `apex.toml`).
pub const CONFIG_FILE: &str = "apex";

/// Prefix of the environment overrides.
pub const ENV_PREFIX: &str = "APEX";

/// Web application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// SQLite connection string
    pub database_url: String,

    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Pool size (1 = one shared connection)
    pub max_connections: u32,

    /// Apply schema and fixture migrations on startup
    pub run_migrations: bool,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl WebConfig {
    /// Load configuration from defaults, `apex.toml` and `APEX_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Self::from_settings(settings)
    }

    /// Builder preloaded with every default. Callers add their own sources.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("database_url", "sqlite://apex.db")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080_i64)?
            .set_default("max_connections", 1_i64)?
            .set_default("run_migrations", true)?
            .set_default("log_level", "info")?)
    }

    /// Deserialize and validate a built configuration.
    pub fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: WebConfig = settings.try_deserialize()?;

        if config.port == 0 {
            return Err(ConfigError::InvalidValue("port".to_string()));
        }
        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue("max_connections".to_string()));
        }

        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_url.clone())
            .max_connections(self.max_connections)
            .run_migrations(self.run_migrations)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unable to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn with_toml(toml: &str) -> Result<WebConfig, ConfigError> {
        let settings = WebConfig::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        WebConfig::from_settings(settings)
    }

    #[test]
    fn test_defaults() {
        let config = with_toml("").unwrap();

        assert_eq!(config.database_url, "sqlite://apex.db");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.max_connections, 1);
        assert!(config.run_migrations);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = with_toml(
            r#"
            database_url = "sqlite://data/ledger.db"
            port = 3000
            run_migrations = false
            "#,
        )
        .unwrap();

        assert_eq!(config.database_url, "sqlite://data/ledger.db");
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");

        let db = config.db_config();
        assert!(!db.run_migrations);
        assert_eq!(db.database_url, "sqlite://data/ledger.db");
    }

    #[test]
    fn test_zero_port_rejected() {
        assert!(matches!(
            with_toml("port = 0"),
            Err(ConfigError::InvalidValue(field)) if field == "port"
        ));
    }

    #[test]
    fn test_zero_connections_rejected() {
        assert!(matches!(
            with_toml("max_connections = 0"),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
