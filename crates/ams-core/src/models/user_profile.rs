use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 1:1 extension of [`crate::User`] holding the data owned by the remote
/// identity service. Role, department and faculty are overwritten on every
/// successful login; the remote system is the source of truth for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Unique id in the remote identity system
    pub external_id: String,
    pub role: Role,
    pub department: String,
    pub faculty: String,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: Uuid, external_id: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            external_id,
            role,
            department: String::new(),
            faculty: String::new(),
            updated_at: Utc::now(),
        }
    }
}
