//! Local-credential fallback for accounts not backed by the remote
//! identity system (administrative bootstrap accounts).

use crate::{Authenticator, AuthError, Result as AuthErrorResult};

use ams_core::User;
use ams_db::UserRepository;

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use async_trait::async_trait;
use log::debug;
use sqlx::SqlitePool;

pub struct LocalAuthenticator {
    users: UserRepository,
}

impl LocalAuthenticator {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Hash a password for a bootstrap account
    pub fn hash_password(password: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Ok(Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::password_hash(e.to_string()))?
            .to_string())
    }
}

#[async_trait]
impl Authenticator for LocalAuthenticator {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> AuthErrorResult<Option<User>> {
        if username.is_empty() || password.is_empty() {
            return Ok(None);
        }

        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(None);
        };

        // Unusable-password marker: delegated accounts can never pass here
        let Some(ref stored) = user.password_hash else {
            debug!("Local authentication skipped for {}: delegated account", username);
            return Ok(None);
        };

        let parsed =
            PasswordHash::new(stored).map_err(|e| AuthError::password_hash(e.to_string()))?;

        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
        {
            Ok(Some(user))
        } else {
            debug!("Local authentication failed for {}", username);
            Ok(None)
        }
    }
}
