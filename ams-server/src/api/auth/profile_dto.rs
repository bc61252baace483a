use ams_core::UserProfile;

use serde::Serialize;

/// Profile DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub external_id: String,
    pub role: String,
    pub department: String,
    pub faculty: String,
    pub updated_at: i64,
}

impl From<UserProfile> for ProfileDto {
    fn from(p: UserProfile) -> Self {
        Self {
            external_id: p.external_id,
            role: p.role.as_str().to_string(),
            department: p.department,
            faculty: p.faculty,
            updated_at: p.updated_at.timestamp(),
        }
    }
}
