pub mod assignment;
pub mod course;
pub mod enrollment;
pub mod enrollment_status;
pub mod role;
pub mod session;
pub mod user;
pub mod user_profile;
