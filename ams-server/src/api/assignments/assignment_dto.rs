use ams_core::Assignment;

use serde::Serialize;

/// Assignment DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct AssignmentDto {
    pub id: String,
    pub course_id: String,
    pub name: String,
    pub description: Option<String>,
    pub due_at: Option<i64>,
    pub total_points: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Assignment> for AssignmentDto {
    fn from(a: Assignment) -> Self {
        Self {
            id: a.id.to_string(),
            course_id: a.course_id.to_string(),
            name: a.name,
            description: a.description,
            due_at: a.due_at.map(|d| d.timestamp()),
            total_points: a.total_points,
            created_at: a.created_at.timestamp(),
            updated_at: a.updated_at.timestamp(),
        }
    }
}
