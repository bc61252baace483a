pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::assignment_repository::AssignmentRepository;
pub use repositories::course_repository::CourseRepository;
pub use repositories::enrollment_repository::EnrollmentRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::session_repository::SessionRepository;
pub use repositories::user_repository::UserRepository;

/// Embedded migrations, shared by the server binary and test pools
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
