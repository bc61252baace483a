//! Integration tests for course API handlers
mod common;

use crate::common::{
    create_local_user, create_profile, create_test_app_state, create_test_course, issue_session,
};

use ams_core::Role;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use ams_server::build_router;

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn create_course_request(token: Uuid, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/courses")
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_create_course_as_teacher() {
    let state = create_test_app_state().await;
    let teacher = create_local_user(&state.pool, "teacher01", "pw").await;
    create_profile(&state.pool, teacher.id, Role::Teacher).await;
    let token = issue_session(&state.pool, teacher.id).await;

    let app = build_router(state.clone());

    let body = serde_json::json!({
        "code": "CS101",
        "name": "Intro to Computing",
        "term": "1",
        "year": 2026
    });
    let response = app.oneshot(create_course_request(token, body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["course"]["code"], "CS101");
    assert_eq!(json["course"]["created_by"], teacher.id.to_string());
}

#[tokio::test]
async fn test_create_course_as_student_forbidden() {
    let state = create_test_app_state().await;
    let student = create_local_user(&state.pool, "student01", "pw").await;
    create_profile(&state.pool, student.id, Role::Student).await;
    let token = issue_session(&state.pool, student.id).await;

    let app = build_router(state.clone());

    let body = serde_json::json!({
        "code": "CS101",
        "name": "Intro to Computing",
        "term": "1",
        "year": 2026
    });
    let response = app.oneshot(create_course_request(token, body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = response_json(response).await;
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_create_course_without_profile_forbidden() {
    // No profile row defaults to the least-privileged role
    let state = create_test_app_state().await;
    let user = create_local_user(&state.pool, "nobody01", "pw").await;
    let token = issue_session(&state.pool, user.id).await;

    let app = build_router(state.clone());

    let body = serde_json::json!({
        "code": "CS101",
        "name": "Intro to Computing",
        "term": "1",
        "year": 2026
    });
    let response = app.oneshot(create_course_request(token, body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_course_empty_code_rejected() {
    let state = create_test_app_state().await;
    let admin = create_local_user(&state.pool, "admin01", "pw").await;
    create_profile(&state.pool, admin.id, Role::Admin).await;
    let token = issue_session(&state.pool, admin.id).await;

    let app = build_router(state.clone());

    let body = serde_json::json!({
        "code": "  ",
        "name": "Intro to Computing",
        "term": "1",
        "year": 2026
    });
    let response = app.oneshot(create_course_request(token, body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "code");
}

#[tokio::test]
async fn test_create_duplicate_course_conflict() {
    let state = create_test_app_state().await;
    let admin = create_local_user(&state.pool, "admin01", "pw").await;
    create_profile(&state.pool, admin.id, Role::Admin).await;
    let token = issue_session(&state.pool, admin.id).await;

    let app = build_router(state.clone());

    let body = serde_json::json!({
        "code": "CS101",
        "name": "Intro to Computing",
        "term": "1",
        "year": 2026
    });

    let first = app
        .clone()
        .oneshot(create_course_request(token, body.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // Same (code, term, year)
    let second = app.oneshot(create_course_request(token, body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = response_json(second).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_list_courses() {
    let state = create_test_app_state().await;
    let user = create_local_user(&state.pool, "student01", "pw").await;
    create_test_course(&state.pool, user.id).await;
    let token = issue_session(&state.pool, user.id).await;

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/courses")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let courses = json["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["code"], "CS101");
}

#[tokio::test]
async fn test_get_course_not_found() {
    let state = create_test_app_state().await;
    let user = create_local_user(&state.pool, "student01", "pw").await;
    let token = issue_session(&state.pool, user.id).await;

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/courses/{}", Uuid::new_v4()))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_courses_require_authentication() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/courses")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
