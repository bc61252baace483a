use crate::api::enrollments::enrollment_dto::EnrollmentDto;
use serde::Serialize;

/// Single enrollment response
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub enrollment: EnrollmentDto,
}
