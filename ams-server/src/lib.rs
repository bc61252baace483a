pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    assignments::{
        assignment_dto::AssignmentDto,
        assignment_list_response::AssignmentListResponse,
        assignment_response::AssignmentResponse,
        assignments::{create_assignment, get_assignment, list_assignments},
        create_assignment_request::CreateAssignmentRequest,
    },
    auth::{
        auth::{login, logout, me},
        login_request::LoginRequest,
        login_response::LoginResponse,
        me_response::MeResponse,
        profile_dto::ProfileDto,
        user_dto::UserDto,
    },
    courses::{
        course_dto::CourseDto,
        course_list_response::CourseListResponse,
        course_response::CourseResponse,
        courses::{create_course, get_course, list_courses},
        create_course_request::CreateCourseRequest,
    },
    enrollments::{
        enrollment_dto::EnrollmentDto,
        enrollment_list_response::EnrollmentListResponse,
        enrollment_response::EnrollmentResponse,
        enrollments::{enroll, list_enrollments, withdraw},
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
