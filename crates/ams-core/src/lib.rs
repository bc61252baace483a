pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::assignment::Assignment;
pub use models::course::Course;
pub use models::enrollment::Enrollment;
pub use models::enrollment_status::EnrollmentStatus;
pub use models::role::Role;
pub use models::session::Session;
pub use models::user::User;
pub use models::user_profile::UserProfile;

#[cfg(test)]
mod tests;
