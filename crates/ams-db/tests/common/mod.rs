#![allow(dead_code)]

use ams_core::{Course, User};
use ams_db::{CourseRepository, UserRepository};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    ams_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a delegated-identity user and returns it
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    let user = User::new_delegated(
        username.to_string(),
        format!("{}@example.ac.th", username),
        "Somchai".to_string(),
        "Jaidee".to_string(),
    );

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}

/// Inserts a course owned by the given user and returns it
pub async fn create_test_course(pool: &SqlitePool, created_by: &User) -> Course {
    let course = Course::new(
        "CS101".to_string(),
        "Introduction to Programming".to_string(),
        "2026/1".to_string(),
        2026,
        created_by.id,
    );

    CourseRepository::new(pool.clone())
        .create(&course)
        .await
        .expect("Failed to create test course");

    course
}
