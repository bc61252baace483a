use crate::api::{assignments, auth, courses, enrollments};
use crate::app_state::AppState;
use crate::health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authentication
        .route("/api/v1/auth/login", post(auth::auth::login))
        .route("/api/v1/auth/logout", post(auth::auth::logout))
        .route("/api/v1/auth/me", get(auth::auth::me))
        // Courses
        .route(
            "/api/v1/courses",
            get(courses::courses::list_courses).post(courses::courses::create_course),
        )
        .route("/api/v1/courses/{id}", get(courses::courses::get_course))
        // Enrollments
        .route(
            "/api/v1/courses/{id}/enrollments",
            get(enrollments::enrollments::list_enrollments)
                .post(enrollments::enrollments::enroll)
                .delete(enrollments::enrollments::withdraw),
        )
        // Assignments
        .route(
            "/api/v1/courses/{id}/assignments",
            get(assignments::assignments::list_assignments)
                .post(assignments::assignments::create_assignment),
        )
        .route(
            "/api/v1/assignments/{id}",
            get(assignments::assignments::get_assignment),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
