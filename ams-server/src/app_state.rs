use ams_auth::AuthenticatorChain;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Ordered authenticators; first `Some` wins
    pub authenticators: Arc<AuthenticatorChain>,
    pub session_ttl_secs: u64,
}

impl AppState {
    pub fn new(pool: SqlitePool, authenticators: AuthenticatorChain, session_ttl_secs: u64) -> Self {
        Self {
            pool,
            authenticators: Arc::new(authenticators),
            session_ttl_secs,
        }
    }
}
