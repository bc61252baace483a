//! Course REST API handlers

use crate::api::courses::{
    course_list_response::CourseListResponse, course_response::CourseResponse,
    create_course_request::CreateCourseRequest,
};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::api::roles::caller_role;
use crate::app_state::AppState;

use ams_core::Course;
use ams_db::CourseRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/courses
///
/// Create a course. Teachers and admins only.
pub async fn create_course(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<CreateCourseRequest>,
) -> ApiResult<(StatusCode, Json<CourseResponse>)> {
    let role = caller_role(&state.pool, current.user.id).await?;
    if !role.can_manage_courses() {
        return Err(ApiError::forbidden("Only teachers and admins can create courses"));
    }

    if request.code.trim().is_empty() {
        return Err(ApiError::validation("code must not be empty", Some("code".into())));
    }
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be empty", Some("name".into())));
    }

    let mut course = Course::new(
        request.code,
        request.name,
        request.term,
        request.year,
        current.user.id,
    );
    course.description = request.description;
    course.department = request.department.unwrap_or_default();
    course.faculty = request.faculty.unwrap_or_default();

    let repo = CourseRepository::new(state.pool.clone());
    repo.create(&course).await?;

    log::info!("Course {} created by {}", course.code, current.user.username);

    Ok((
        StatusCode::CREATED,
        Json(CourseResponse {
            course: course.into(),
        }),
    ))
}

/// GET /api/v1/courses
///
/// List all courses
pub async fn list_courses(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> ApiResult<Json<CourseListResponse>> {
    let repo = CourseRepository::new(state.pool.clone());
    let courses = repo.find_all().await?;

    Ok(Json(CourseListResponse {
        courses: courses.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/courses/{id}
///
/// Get a single course by ID
pub async fn get_course(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<CourseResponse>> {
    let course_id = Uuid::parse_str(&id)?;

    let repo = CourseRepository::new(state.pool.clone());
    let course = repo
        .find_by_id(course_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Course {} not found", id)))?;

    Ok(Json(CourseResponse {
        course: course.into(),
    }))
}
