pub mod assignment_dto;
pub mod assignment_list_response;
pub mod assignment_response;
pub mod assignments;
pub mod create_assignment_request;
