use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use ams_core::Course;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct CourseRepository {
    pool: SqlitePool,
}

impl CourseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, course: &Course) -> DbErrorResult<()> {
        let id = course.id.to_string();
        let created_by = course.created_by.to_string();
        let created_at = course.created_at.timestamp();
        let updated_at = course.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO ams_courses (
                    id, code, name, description, term, year, department, faculty,
                    created_by, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&course.code)
        .bind(&course.name)
        .bind(&course.description)
        .bind(&course.term)
        .bind(course.year)
        .bind(&course.department)
        .bind(&course.faculty)
        .bind(&created_by)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Course>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, code, name, description, term, year, department, faculty,
                    created_by, created_at, updated_at
                FROM ams_courses
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_course_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Course>> {
        let rows = sqlx::query(
            r#"
                SELECT id, code, name, description, term, year, department, faculty,
                    created_by, created_at, updated_at
                FROM ams_courses
                ORDER BY year DESC, term DESC, code ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_course_row).collect()
    }
}

fn map_course_row(row: SqliteRow) -> DbErrorResult<Course> {
    let id: String = row.try_get("id")?;
    let created_by: String = row.try_get("created_by")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Course {
        id: parse_uuid(&id, "ams_courses.id")?,
        code: row.try_get("code")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        term: row.try_get("term")?,
        year: row.try_get("year")?,
        department: row.try_get("department")?,
        faculty: row.try_get("faculty")?,
        created_by: parse_uuid(&created_by, "ams_courses.created_by")?,
        created_at: parse_timestamp(created_at, "ams_courses.created_at")?,
        updated_at: parse_timestamp(updated_at, "ams_courses.updated_at")?,
    })
}
