//! Assignment REST API handlers

use crate::api::assignments::{
    assignment_list_response::AssignmentListResponse, assignment_response::AssignmentResponse,
    create_assignment_request::CreateAssignmentRequest,
};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::api::roles::caller_role;
use crate::app_state::AppState;

use ams_core::Assignment;
use ams_db::{AssignmentRepository, CourseRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// POST /api/v1/courses/{id}/assignments
///
/// Create an assignment in a course. Teachers and admins only.
pub async fn create_assignment(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<CreateAssignmentRequest>,
) -> ApiResult<(StatusCode, Json<AssignmentResponse>)> {
    let role = caller_role(&state.pool, current.user.id).await?;
    if !role.can_manage_courses() {
        return Err(ApiError::forbidden(
            "Only teachers and admins can create assignments",
        ));
    }

    let course_id = Uuid::parse_str(&id)?;
    CourseRepository::new(state.pool.clone())
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Course {} not found", id)))?;

    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be empty", Some("name".into())));
    }

    let mut assignment = Assignment::new(course_id, request.name);
    assignment.description = request.description;
    assignment.due_at = request
        .due_at
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
    if let Some(points) = request.total_points {
        if points < 0 {
            return Err(ApiError::validation(
                "total_points must not be negative",
                Some("total_points".into()),
            ));
        }
        assignment.total_points = points;
    }

    AssignmentRepository::new(state.pool.clone())
        .create(&assignment)
        .await?;

    log::info!(
        "Assignment {} created in course {} by {}",
        assignment.name,
        course_id,
        current.user.username
    );

    Ok((
        StatusCode::CREATED,
        Json(AssignmentResponse {
            assignment: assignment.into(),
        }),
    ))
}

/// GET /api/v1/courses/{id}/assignments
///
/// List assignments for a course
pub async fn list_assignments(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<AssignmentListResponse>> {
    let course_id = Uuid::parse_str(&id)?;
    CourseRepository::new(state.pool.clone())
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Course {} not found", id)))?;

    let assignments = AssignmentRepository::new(state.pool.clone())
        .list_for_course(course_id)
        .await?;

    Ok(Json(AssignmentListResponse {
        assignments: assignments.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/assignments/{id}
///
/// Get a single assignment by ID
pub async fn get_assignment(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<AssignmentResponse>> {
    let assignment_id = Uuid::parse_str(&id)?;

    let assignment = AssignmentRepository::new(state.pool.clone())
        .find_by_id(assignment_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Assignment {} not found", id)))?;

    Ok(Json(AssignmentResponse {
        assignment: assignment.into(),
    }))
}
