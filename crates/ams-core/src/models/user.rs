//! Local user identity - the durable record behind a session principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A local user. Accounts created by the identity bridge carry no
/// `password_hash` (the unusable-password marker): they can only
/// authenticate through delegated verification, never against locally
/// stored credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique, always equal to the verified external username
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 hash for local-credential accounts; None = delegated only
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a delegated-identity user (unusable password)
    pub fn new_delegated(username: String, email: String, first_name: String, last_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            first_name,
            last_name,
            password_hash: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this account can authenticate with a locally stored password
    pub fn has_usable_password(&self) -> bool {
        self.password_hash.is_some()
    }
}
