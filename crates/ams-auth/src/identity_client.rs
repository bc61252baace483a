//! HTTP client for the university identity API.
//!
//! Every failure mode short of a contract violation collapses to `None`
//! at this boundary: authentication failure is a normal outcome, not an
//! exception. Rejected credentials (non-2xx) and an unreachable or
//! misbehaving service are logged at different levels so operators can
//! tell them apart.

use crate::{AuthError, ProfileCache, RemoteIdentityRecord, Result as AuthErrorResult};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use serde::Serialize;

const APPLICATION_KEY_HEADER: &str = "Application-Key";

/// Connection settings for the remote identity service. The server
/// binary converts its config type into this.
#[derive(Debug, Clone)]
pub struct RemoteClientConfig {
    pub base_url: String,
    pub verify_path: String,
    pub profile_path: String,
    pub application_key: String,
    /// Hard bound on every remote call
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

/// Seam for credential verification and profile lookup. Production uses
/// [`RemoteIdentityClient`]; tests inject stubs.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify a credential pair. `None` covers both rejected credentials
    /// and an unavailable service; the caller cannot and must not tell
    /// them apart.
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Option<RemoteIdentityRecord>;

    /// Fetch richer profile data by external id, served from the shared
    /// TTL cache when fresh.
    async fn get_profile(&self, external_id: &str) -> Option<RemoteIdentityRecord>;
}

/// Wire format of the verification request body
#[derive(Serialize)]
struct VerifyRequest<'a> {
    #[serde(rename = "UserName")]
    username: &'a str,
    #[serde(rename = "PassWord")]
    password: &'a str,
}

pub struct RemoteIdentityClient {
    config: RemoteClientConfig,
    client: reqwest::Client,
    cache: ProfileCache,
}

impl RemoteIdentityClient {
    pub fn new(config: RemoteClientConfig) -> AuthErrorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AuthError::client_init(e.to_string()))?;

        // Log presence/length of the key only, never its value
        info!(
            "Identity client initialized: {} (key length {}, timeout {:?})",
            config.base_url,
            config.application_key.len(),
            config.timeout
        );

        let cache = ProfileCache::new(config.cache_ttl);

        Ok(Self {
            config,
            client,
            cache,
        })
    }

    fn verify_url(&self) -> String {
        format!("{}{}", self.config.base_url, self.config.verify_path)
    }

    fn profile_url(&self) -> String {
        format!("{}{}", self.config.base_url, self.config.profile_path)
    }

    /// Parse a successful response body, collapsing malformed payloads
    /// to `None` with an error log.
    async fn parse_body(response: reqwest::Response, context: &str) -> Option<RemoteIdentityRecord> {
        match response.json::<RemoteIdentityRecord>().await {
            Ok(record) => Some(record),
            Err(e) => {
                error!("Malformed identity payload ({}): {}", context, e);
                None
            }
        }
    }
}

#[async_trait]
impl IdentityProvider for RemoteIdentityClient {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Option<RemoteIdentityRecord> {
        let url = self.verify_url();
        debug!("Verifying credentials for {} at {}", username, url);

        let body = VerifyRequest { username, password };

        let response = match self
            .client
            .post(&url)
            .header(APPLICATION_KEY_HEADER, &self.config.application_key)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                // Unavailable: timeout or transport failure
                error!("Identity service unreachable verifying {}: {}", username, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            // Rejected: the service answered and said no
            warn!(
                "Identity service rejected credentials for {}: status {}",
                username, status
            );
            return None;
        }

        let record = Self::parse_body(response, "verify").await?;
        info!("Credentials verified for {}", username);
        Some(record)
    }

    async fn get_profile(&self, external_id: &str) -> Option<RemoteIdentityRecord> {
        if let Some(record) = self.cache.get(external_id) {
            debug!("Profile cache hit for {}", external_id);
            return Some(record);
        }

        let url = self.profile_url();
        debug!("Fetching profile for {} from {}", external_id, url);

        let response = match self
            .client
            .get(&url)
            .query(&[("id", external_id)])
            .header(APPLICATION_KEY_HEADER, &self.config.application_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(
                    "Identity service unreachable fetching profile {}: {}",
                    external_id, e
                );
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Profile lookup failed for {}: status {}",
                external_id, status
            );
            return None;
        }

        let record = Self::parse_body(response, "profile").await?;
        self.cache.insert(external_id, record.clone());
        Some(record)
    }
}
