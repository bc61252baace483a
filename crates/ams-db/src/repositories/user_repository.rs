//! User repository - lookups behind the session/principal accessor and
//! the local-credential fallback authenticator.

use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use ams_core::User;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user row. The reconciliation engine bypasses this and
    /// performs its own conflict-resolving upsert; this path serves
    /// bootstrap accounts and tests.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO ams_users (
                    id, username, email, first_name, last_name, password_hash,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Principal lookup by primary key. None is a normal outcome for a
    /// stale identifier, never an error.
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, username, email, first_name, last_name, password_hash,
                    created_at, updated_at
                FROM ams_users
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_user_row).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, email, first_name, last_name, password_hash,
                    created_at, updated_at
                FROM ams_users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_user_row).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM ams_users")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("n")?)
    }
}

/// Map a full user row. Public so the reconciliation engine can reuse it
/// for rows fetched inside its own transaction.
pub fn map_user_row(row: SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: parse_uuid(&id, "ams_users.id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        password_hash: row.try_get("password_hash")?,
        created_at: parse_timestamp(created_at, "ams_users.created_at")?,
        updated_at: parse_timestamp(updated_at, "ams_users.updated_at")?,
    })
}
