//! Role lookup for authorization checks.

use crate::api::error::Result as ApiResult;

use ams_core::Role;
use ams_db::ProfileRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Resolve the caller's role from their reconciled profile. Accounts
/// without a profile (local bootstrap accounts before one is assigned)
/// get the least-privileged role.
pub async fn caller_role(pool: &SqlitePool, user_id: Uuid) -> ApiResult<Role> {
    let profile = ProfileRepository::new(pool.clone())
        .find_by_user_id(user_id)
        .await?;

    Ok(profile.map(|p| p.role).unwrap_or_default())
}
