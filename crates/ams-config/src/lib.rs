mod config;
mod database_config;
mod error;
mod identity_api_config;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_api_config::IdentityApiConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "ams.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DATABASE_BUSY_TIMEOUT_SECS: u64 = 5;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_VERIFY_PATH: &str = "/api/v1/auth/Ad/verify";
const DEFAULT_PROFILE_PATH: &str = "/api/v2/profile/std/info";
const DEFAULT_IDENTITY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;

#[cfg(test)]
mod tests;
