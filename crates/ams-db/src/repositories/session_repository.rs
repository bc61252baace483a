use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use ams_core::Session;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, session: &Session) -> DbErrorResult<()> {
        let token = session.token.to_string();
        let user_id = session.user_id.to_string();
        let created_at = session.created_at.timestamp();
        let expires_at = session.expires_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO ams_sessions (token, user_id, created_at, expires_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&token)
        .bind(&user_id)
        .bind(created_at)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Resolve a token to an unexpired session. Expired tokens look the
    /// same as unknown ones to the caller.
    pub async fn find_valid(
        &self,
        token: Uuid,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<Session>> {
        let token_str = token.to_string();
        let now_secs = now.timestamp();

        let row = sqlx::query(
            r#"
                SELECT token, user_id, created_at, expires_at
                FROM ams_sessions
                WHERE token = ? AND expires_at > ?
            "#,
        )
        .bind(&token_str)
        .bind(now_secs)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_session_row).transpose()
    }

    /// Invalidate a session. Returns false when the token was already gone.
    pub async fn delete(&self, token: Uuid) -> DbErrorResult<bool> {
        let token_str = token.to_string();

        let result = sqlx::query("DELETE FROM ams_sessions WHERE token = ?")
            .bind(&token_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> DbErrorResult<u64> {
        let now_secs = now.timestamp();

        let result = sqlx::query("DELETE FROM ams_sessions WHERE expires_at <= ?")
            .bind(now_secs)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_session_row(row: SqliteRow) -> DbErrorResult<Session> {
    let token: String = row.try_get("token")?;
    let user_id: String = row.try_get("user_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let expires_at: i64 = row.try_get("expires_at")?;

    Ok(Session {
        token: parse_uuid(&token, "ams_sessions.token")?,
        user_id: parse_uuid(&user_id, "ams_sessions.user_id")?,
        created_at: parse_timestamp(created_at, "ams_sessions.created_at")?,
        expires_at: parse_timestamp(expires_at, "ams_sessions.expires_at")?,
    })
}
