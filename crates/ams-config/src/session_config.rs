use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_TTL_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.ttl_secs == 0 {
            return Err(ConfigError::session("session.ttl_secs must be greater than 0"));
        }

        Ok(())
    }
}
