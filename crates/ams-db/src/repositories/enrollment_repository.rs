use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use ams_core::{Enrollment, EnrollmentStatus};

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct EnrollmentRepository {
    pool: SqlitePool,
}

impl EnrollmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Enroll a user into a course. Re-enrolling a withdrawn user flips
    /// the existing row back to enrolled instead of inserting a duplicate.
    pub async fn enroll(&self, course_id: Uuid, user_id: Uuid) -> DbErrorResult<Enrollment> {
        let enrollment = Enrollment::new(course_id, user_id);
        let id = enrollment.id.to_string();
        let course_id_str = course_id.to_string();
        let user_id_str = user_id.to_string();
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO ams_enrollments (id, course_id, user_id, status, enrolled_at, updated_at)
                VALUES (?, ?, ?, 'enrolled', ?, ?)
                ON CONFLICT(course_id, user_id) DO UPDATE SET
                    status = 'enrolled',
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(&id)
        .bind(&course_id_str)
        .bind(&user_id_str)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        // Re-read: the conflict branch keeps the original row id
        self.find(course_id, user_id)
            .await?
            .ok_or_else(|| crate::DbError::mapping("enrollment missing after upsert"))
    }

    /// Mark an enrollment withdrawn. Returns false when no active
    /// enrollment existed.
    pub async fn withdraw(&self, course_id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let course_id_str = course_id.to_string();
        let user_id_str = user_id.to_string();
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE ams_enrollments
                SET status = 'withdrawn', updated_at = ?
                WHERE course_id = ? AND user_id = ? AND status = 'enrolled'
            "#,
        )
        .bind(now)
        .bind(&course_id_str)
        .bind(&user_id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find(&self, course_id: Uuid, user_id: Uuid) -> DbErrorResult<Option<Enrollment>> {
        let course_id_str = course_id.to_string();
        let user_id_str = user_id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, course_id, user_id, status, enrolled_at, updated_at
                FROM ams_enrollments
                WHERE course_id = ? AND user_id = ?
            "#,
        )
        .bind(&course_id_str)
        .bind(&user_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_enrollment_row).transpose()
    }

    pub async fn list_for_course(&self, course_id: Uuid) -> DbErrorResult<Vec<Enrollment>> {
        let course_id_str = course_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, course_id, user_id, status, enrolled_at, updated_at
                FROM ams_enrollments
                WHERE course_id = ?
                ORDER BY enrolled_at ASC
            "#,
        )
        .bind(&course_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_enrollment_row).collect()
    }

    /// Whether the user currently has an active enrollment in the course
    pub async fn is_enrolled(&self, course_id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        Ok(self
            .find(course_id, user_id)
            .await?
            .map(|e| e.is_active())
            .unwrap_or(false))
    }
}

fn map_enrollment_row(row: SqliteRow) -> DbErrorResult<Enrollment> {
    let id: String = row.try_get("id")?;
    let course_id: String = row.try_get("course_id")?;
    let user_id: String = row.try_get("user_id")?;
    let status: String = row.try_get("status")?;
    let enrolled_at: i64 = row.try_get("enrolled_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Enrollment {
        id: parse_uuid(&id, "ams_enrollments.id")?,
        course_id: parse_uuid(&course_id, "ams_enrollments.course_id")?,
        user_id: parse_uuid(&user_id, "ams_enrollments.user_id")?,
        status: EnrollmentStatus::from_str(&status).map_err(|e| {
            crate::DbError::mapping(format!("Invalid status in ams_enrollments.status: {}", e))
        })?,
        enrolled_at: parse_timestamp(enrolled_at, "ams_enrollments.enrolled_at")?,
        updated_at: parse_timestamp(updated_at, "ams_enrollments.updated_at")?,
    })
}
