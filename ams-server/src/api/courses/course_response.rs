use crate::api::courses::course_dto::CourseDto;
use serde::Serialize;

/// Single course response
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course: CourseDto,
}
