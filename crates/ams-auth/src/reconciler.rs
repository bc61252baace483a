//! Identity reconciliation engine - converges local storage with the
//! latest verified remote identity snapshot.

use crate::{AuthError, RemoteIdentityRecord, Result as AuthErrorResult, resolve_role};

use ams_core::User;
use ams_db::repositories::user_repository::map_user_row;

use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create-or-update engine for users and their profiles.
///
/// Both upserts run in one transaction so a partial failure never leaves
/// a half-created identity. The user upsert resolves concurrent
/// first-login races inside SQLite via the unique username constraint:
/// the losing writer takes the conflict branch instead of failing, so at
/// most one row is ever created per username.
#[derive(Clone)]
pub struct Reconciler {
    pool: SqlitePool,
}

impl Reconciler {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Upsert the local user and profile for a verified remote record.
    ///
    /// Precondition: the record carries a username. A record without one
    /// is an upstream contract violation and fails hard with
    /// [`AuthError::MalformedRecord`]; nothing is written.
    pub async fn reconcile(&self, record: &RemoteIdentityRecord) -> AuthErrorResult<User> {
        if record.username.is_empty() {
            return Err(AuthError::malformed("remote record has no username"));
        }

        let (first_name, last_name) = record.given_family_names();
        let role = resolve_role(record);
        let external_id = record.external_id().to_string();
        let now = Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        // Created rows get the unusable-password marker (NULL hash);
        // the conflict branch refreshes identity fields and leaves any
        // existing password_hash untouched.
        sqlx::query(
            r#"
                INSERT INTO ams_users (
                    id, username, email, first_name, last_name, password_hash,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, NULL, ?, ?)
                ON CONFLICT(username) DO UPDATE SET
                    email = excluded.email,
                    first_name = excluded.first_name,
                    last_name = excluded.last_name,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&record.username)
        .bind(&record.email)
        .bind(&first_name)
        .bind(&last_name)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        // Re-read inside the transaction: on conflict the original row id
        // survives, not the one we just generated.
        let row = sqlx::query(
            r#"
                SELECT id, username, email, first_name, last_name, password_hash,
                    created_at, updated_at
                FROM ams_users
                WHERE username = ?
            "#,
        )
        .bind(&record.username)
        .fetch_one(&mut *tx)
        .await?;

        let user = map_user_row(row)?;

        // Role, department and faculty come from the remote system on
        // every login; the profile never accumulates local edits.
        sqlx::query(
            r#"
                INSERT INTO ams_profiles (
                    id, user_id, external_id, role, department, faculty, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(user_id) DO UPDATE SET
                    external_id = excluded.external_id,
                    role = excluded.role,
                    department = excluded.department,
                    faculty = excluded.faculty,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user.id.to_string())
        .bind(&external_id)
        .bind(role.as_str())
        .bind(&record.department)
        .bind(&record.faculty)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            "Reconciled {} as {} (external id {})",
            user.username, role, external_id
        );

        Ok(user)
    }
}
