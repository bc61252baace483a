use ams_core::Course;

use serde::Serialize;

/// Course DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct CourseDto {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub term: String,
    pub year: i32,
    pub department: String,
    pub faculty: String,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Course> for CourseDto {
    fn from(c: Course) -> Self {
        Self {
            id: c.id.to_string(),
            code: c.code,
            name: c.name,
            description: c.description,
            term: c.term,
            year: c.year,
            department: c.department,
            faculty: c.faculty,
            created_by: c.created_by.to_string(),
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
