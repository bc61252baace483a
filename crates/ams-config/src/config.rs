use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, IdentityApiConfig, LoggingConfig,
    ServerConfig, SessionConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub identity_api: IdentityApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for AMS_CONFIG_DIR env var, else use ./.ams/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AMS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AMS_CONFIG_DIR env var > ./.ams/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("AMS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".ams"))
    }

    /// Apply environment variable overrides. Secrets (the application key)
    /// are only ever read from the environment, never from config.toml
    /// committed to disk.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("AMS_IDENTITY_API_URL") {
            self.identity_api.base_url = url;
        }

        if let Ok(key) = std::env::var("AMS_IDENTITY_API_KEY") {
            self.identity_api.application_key = Some(key);
        }

        if let Ok(host) = std::env::var("AMS_SERVER_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("AMS_SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.identity_api.validate()?;
        self.session.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::database(
                "database.max_connections must be at least 1",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);

        if self.identity_api.is_configured() {
            let key_len = self
                .identity_api
                .application_key
                .as_ref()
                .map(|k| k.len())
                .unwrap_or(0);
            info!(
                "  identity api: {} (key length {}, timeout {}s, cache ttl {}s)",
                self.identity_api.base_url,
                key_len,
                self.identity_api.timeout_secs,
                self.identity_api.cache_ttl_secs
            );
        } else {
            info!("  identity api: not configured (local authentication only)");
        }

        info!("  session ttl: {}s", self.session.ttl_secs);
    }
}
