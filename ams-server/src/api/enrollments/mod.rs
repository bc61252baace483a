pub mod enrollment_dto;
pub mod enrollment_list_response;
pub mod enrollment_response;
pub mod enrollments;
