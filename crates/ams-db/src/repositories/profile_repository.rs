use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use ams_core::{Role, UserProfile};

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> DbErrorResult<Option<UserProfile>> {
        let user_id_str = user_id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, user_id, external_id, role, department, faculty, updated_at
                FROM ams_profiles
                WHERE user_id = ?
            "#,
        )
        .bind(&user_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_profile_row).transpose()
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
                SELECT id, user_id, external_id, role, department, faculty, updated_at
                FROM ams_profiles
                WHERE external_id = ?
            "#,
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_profile_row).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM ams_profiles")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("n")?)
    }
}

pub(crate) fn map_profile_row(row: SqliteRow) -> DbErrorResult<UserProfile> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let role: String = row.try_get("role")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(UserProfile {
        id: parse_uuid(&id, "ams_profiles.id")?,
        user_id: parse_uuid(&user_id, "ams_profiles.user_id")?,
        external_id: row.try_get("external_id")?,
        role: Role::from_str(&role)
            .map_err(|e| crate::DbError::mapping(format!("Invalid role in ams_profiles.role: {}", e)))?,
        department: row.try_get("department")?,
        faculty: row.try_get("faculty")?,
        updated_at: parse_timestamp(updated_at, "ams_profiles.updated_at")?,
    })
}
