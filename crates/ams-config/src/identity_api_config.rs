use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CACHE_TTL_SECS, DEFAULT_IDENTITY_TIMEOUT_SECS,
    DEFAULT_PROFILE_PATH, DEFAULT_VERIFY_PATH,
};

use serde::Deserialize;

/// Connection settings for the university identity API.
///
/// The application key is a secret: it is read from the
/// `AMS_IDENTITY_API_KEY` environment variable (see
/// `Config::apply_env_overrides`) and must never be logged.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityApiConfig {
    pub base_url: String,
    pub verify_path: String,
    pub profile_path: String,
    pub application_key: Option<String>,
    /// Hard bound on every remote call
    pub timeout_secs: u64,
    /// TTL for the shared profile response cache
    pub cache_ttl_secs: u64,
}

impl Default for IdentityApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            verify_path: String::from(DEFAULT_VERIFY_PATH),
            profile_path: String::from(DEFAULT_PROFILE_PATH),
            application_key: None,
            timeout_secs: DEFAULT_IDENTITY_TIMEOUT_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl IdentityApiConfig {
    /// The remote backend is skipped entirely when unconfigured
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && self.application_key.is_some()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Ok(()); // unconfigured is valid: local-only authentication
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::identity_api(format!(
                "identity_api.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.application_key.is_none() {
            return Err(ConfigError::identity_api(
                "identity_api.base_url is set but AMS_IDENTITY_API_KEY is missing",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::identity_api(
                "identity_api.timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}
