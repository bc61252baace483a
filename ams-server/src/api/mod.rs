pub mod assignments;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod error;
pub mod extractors;
pub mod roles;
