use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use ams_core::Assignment;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct AssignmentRepository {
    pool: SqlitePool,
}

impl AssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, assignment: &Assignment) -> DbErrorResult<()> {
        let id = assignment.id.to_string();
        let course_id = assignment.course_id.to_string();
        let due_at = assignment.due_at.map(|dt| dt.timestamp());
        let created_at = assignment.created_at.timestamp();
        let updated_at = assignment.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO ams_assignments (
                    id, course_id, name, description, due_at, total_points,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&course_id)
        .bind(&assignment.name)
        .bind(&assignment.description)
        .bind(due_at)
        .bind(assignment.total_points)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Assignment>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, course_id, name, description, due_at, total_points,
                    created_at, updated_at
                FROM ams_assignments
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_assignment_row).transpose()
    }

    pub async fn list_for_course(&self, course_id: Uuid) -> DbErrorResult<Vec<Assignment>> {
        let course_id_str = course_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, course_id, name, description, due_at, total_points,
                    created_at, updated_at
                FROM ams_assignments
                WHERE course_id = ?
                ORDER BY due_at ASC, created_at ASC
            "#,
        )
        .bind(&course_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_assignment_row).collect()
    }
}

fn map_assignment_row(row: SqliteRow) -> DbErrorResult<Assignment> {
    let id: String = row.try_get("id")?;
    let course_id: String = row.try_get("course_id")?;
    let due_at: Option<i64> = row.try_get("due_at")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Assignment {
        id: parse_uuid(&id, "ams_assignments.id")?,
        course_id: parse_uuid(&course_id, "ams_assignments.course_id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        due_at: due_at.and_then(|secs| DateTime::from_timestamp(secs, 0)),
        total_points: row.try_get("total_points")?,
        created_at: parse_timestamp(created_at, "ams_assignments.created_at")?,
        updated_at: parse_timestamp(updated_at, "ams_assignments.updated_at")?,
    })
}
