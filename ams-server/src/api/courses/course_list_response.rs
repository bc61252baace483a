use crate::api::courses::course_dto::CourseDto;
use serde::Serialize;

/// List of courses response
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseDto>,
}
