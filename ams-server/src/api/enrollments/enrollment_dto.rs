use ams_core::Enrollment;

use serde::Serialize;

/// Enrollment DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct EnrollmentDto {
    pub id: String,
    pub course_id: String,
    pub user_id: String,
    pub status: String,
    pub enrolled_at: i64,
    pub updated_at: i64,
}

impl From<Enrollment> for EnrollmentDto {
    fn from(e: Enrollment) -> Self {
        Self {
            id: e.id.to_string(),
            course_id: e.course_id.to_string(),
            user_id: e.user_id.to_string(),
            status: e.status.as_str().to_string(),
            enrolled_at: e.enrolled_at.timestamp(),
            updated_at: e.updated_at.timestamp(),
        }
    }
}
