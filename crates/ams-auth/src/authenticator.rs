//! Pluggable authenticators and the ordered chain that tries them.

use crate::{IdentityProvider, Reconciler, Result as AuthErrorResult};

use ams_core::User;

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

/// One way of turning a credential pair into a local user. `Ok(None)`
/// means "not mine / not valid here" and hands the attempt to the next
/// authenticator in the chain.
#[async_trait]
pub trait Authenticator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> AuthErrorResult<Option<User>>;
}

/// The external-identity bridge: verify remotely, then reconcile the
/// returned record into local storage. Never inspects locally stored
/// credentials; that is exclusively the fallback authenticator's job.
pub struct RemoteAuthenticator {
    provider: Arc<dyn IdentityProvider>,
    reconciler: Reconciler,
}

impl RemoteAuthenticator {
    pub fn new(provider: Arc<dyn IdentityProvider>, reconciler: Reconciler) -> Self {
        Self {
            provider,
            reconciler,
        }
    }
}

#[async_trait]
impl Authenticator for RemoteAuthenticator {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> AuthErrorResult<Option<User>> {
        // Reject locally before spending a network call
        if username.is_empty() || password.is_empty() {
            return Ok(None);
        }

        let Some(record) = self.provider.verify_credentials(username, password).await else {
            return Ok(None);
        };

        let user = self.reconciler.reconcile(&record).await?;
        Ok(Some(user))
    }
}

/// Explicit ordered list of authenticators; the first to return a user
/// wins. Hard errors (contract violations, storage failures) propagate
/// immediately instead of falling through.
pub struct AuthenticatorChain {
    authenticators: Vec<Arc<dyn Authenticator>>,
}

impl AuthenticatorChain {
    pub fn new(authenticators: Vec<Arc<dyn Authenticator>>) -> Self {
        Self { authenticators }
    }

    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> AuthErrorResult<Option<User>> {
        for authenticator in &self.authenticators {
            if let Some(user) = authenticator.authenticate(username, password).await? {
                debug!("Authenticated {} via {}", username, authenticator.name());
                return Ok(Some(user));
            }
        }

        Ok(None)
    }
}
