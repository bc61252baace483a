pub mod course_dto;
pub mod course_list_response;
pub mod course_response;
pub mod courses;
pub mod create_course_request;
