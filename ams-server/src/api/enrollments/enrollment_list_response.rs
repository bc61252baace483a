use crate::api::enrollments::enrollment_dto::EnrollmentDto;
use serde::Serialize;

/// List of enrollments response
#[derive(Debug, Serialize)]
pub struct EnrollmentListResponse {
    pub enrollments: Vec<EnrollmentDto>,
}
