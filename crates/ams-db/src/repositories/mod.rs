pub mod assignment_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod profile_repository;
pub mod session_repository;
pub mod user_repository;

use crate::{DbError, Result};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Parse a TEXT UUID column
#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::mapping(format!("Invalid UUID in {}: {}", column, e)))
}

/// Parse a unix-seconds INTEGER column
#[track_caller]
pub(crate) fn parse_timestamp(value: i64, column: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| DbError::mapping(format!("Invalid timestamp in {}", column)))
}
