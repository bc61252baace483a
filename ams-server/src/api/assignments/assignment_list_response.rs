use crate::api::assignments::assignment_dto::AssignmentDto;
use serde::Serialize;

/// List of assignments response
#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub assignments: Vec<AssignmentDto>,
}
