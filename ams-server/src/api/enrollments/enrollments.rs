//! Enrollment REST API handlers
//!
//! Students enroll and withdraw themselves; anyone authenticated can
//! read the roll of a course.

use crate::api::enrollments::{
    enrollment_list_response::EnrollmentListResponse, enrollment_response::EnrollmentResponse,
};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::app_state::AppState;

use ams_db::{CourseRepository, EnrollmentRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Resolve the course id or reject with 404.
async fn require_course(state: &AppState, id: &str) -> ApiResult<Uuid> {
    let course_id = Uuid::parse_str(id)?;

    let repo = CourseRepository::new(state.pool.clone());
    repo.find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Course {} not found", id)))?;

    Ok(course_id)
}

/// POST /api/v1/courses/{id}/enrollments
///
/// Enroll the calling user. Re-enrolling after a withdrawal reactivates
/// the original enrollment row.
pub async fn enroll(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<EnrollmentResponse>)> {
    let course_id = require_course(&state, &id).await?;

    let repo = EnrollmentRepository::new(state.pool.clone());
    let enrollment = repo.enroll(course_id, current.user.id).await?;

    log::info!("{} enrolled in course {}", current.user.username, course_id);

    Ok((
        StatusCode::CREATED,
        Json(EnrollmentResponse {
            enrollment: enrollment.into(),
        }),
    ))
}

/// DELETE /api/v1/courses/{id}/enrollments
///
/// Withdraw the calling user from the course.
pub async fn withdraw(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let course_id = require_course(&state, &id).await?;

    let repo = EnrollmentRepository::new(state.pool.clone());
    let withdrew = repo.withdraw(course_id, current.user.id).await?;

    if !withdrew {
        return Err(ApiError::not_found("No active enrollment for this course"));
    }

    log::info!("{} withdrew from course {}", current.user.username, course_id);

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/courses/{id}/enrollments
///
/// List enrollments for a course
pub async fn list_enrollments(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<EnrollmentListResponse>> {
    let course_id = require_course(&state, &id).await?;

    let repo = EnrollmentRepository::new(state.pool.clone());
    let enrollments = repo.list_for_course(course_id).await?;

    Ok(Json(EnrollmentListResponse {
        enrollments: enrollments.into_iter().map(Into::into).collect(),
    }))
}
