use crate::api::assignments::assignment_dto::AssignmentDto;
use serde::Serialize;

/// Single assignment response
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub assignment: AssignmentDto,
}
