//! Course entity - the container students enroll into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    /// Course code, e.g. "CS101"
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// Academic term, e.g. "2026/1"
    pub term: String,
    pub year: i32,
    pub department: String,
    pub faculty: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn new(code: String, name: String, term: String, year: i32, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            code,
            name,
            description: None,
            term,
            year,
            department: String::new(),
            faculty: String::new(),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
