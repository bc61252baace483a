#![allow(dead_code)]

//! Test infrastructure for ams-server API tests

use ams_auth::{
    Authenticator, AuthenticatorChain, IdentityProvider, LocalAuthenticator, Reconciler,
    RemoteAuthenticator, RemoteIdentityRecord,
};
use ams_core::{Role, Session, User};
use ams_db::{SessionRepository, UserRepository};
use ams_server::app_state::AppState;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

const TEST_SESSION_TTL_SECS: u64 = 3600;

/// Create a test pool with in-memory SQLite.
///
/// Kept to one connection: each in-memory connection is its own
/// database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

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

/// AppState backed by local-credential authentication only
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let chain = AuthenticatorChain::new(vec![Arc::new(LocalAuthenticator::new(pool.clone()))
        as Arc<dyn Authenticator>]);

    AppState::new(pool, chain, TEST_SESSION_TTL_SECS)
}

/// Identity provider stub accepting any credential pair with a fixed record
pub struct AcceptingProvider {
    record: RemoteIdentityRecord,
}

impl AcceptingProvider {
    pub fn new(record: RemoteIdentityRecord) -> Self {
        Self { record }
    }
}

#[async_trait]
impl IdentityProvider for AcceptingProvider {
    async fn verify_credentials(
        &self,
        _username: &str,
        _password: &str,
    ) -> Option<RemoteIdentityRecord> {
        Some(self.record.clone())
    }

    async fn get_profile(&self, _external_id: &str) -> Option<RemoteIdentityRecord> {
        Some(self.record.clone())
    }
}

/// AppState whose chain verifies remotely against a stub record
pub async fn create_remote_app_state(record: RemoteIdentityRecord) -> AppState {
    let pool = create_test_pool().await;
    let chain = AuthenticatorChain::new(vec![
        Arc::new(RemoteAuthenticator::new(
            Arc::new(AcceptingProvider::new(record)),
            Reconciler::new(pool.clone()),
        )),
        Arc::new(LocalAuthenticator::new(pool.clone())),
    ]);

    AppState::new(pool, chain, TEST_SESSION_TTL_SECS)
}

/// A remote identity record for a student account
pub fn student_record(username: &str) -> RemoteIdentityRecord {
    serde_json::from_value(serde_json::json!({
        "username": username,
        "tu_id": username,
        "email": format!("{}@dome.tu.ac.th", username),
        "displayname_th": "สมชาย ใจดี",
        "displayname_en": "Somchai Jaidee",
        "type": "student",
        "department": "Computer Science",
        "faculty": "Science and Technology",
        "organization": ""
    }))
    .expect("valid record")
}

/// Create a user with a local password
pub async fn create_local_user(pool: &SqlitePool, username: &str, password: &str) -> User {
    let mut user = User::new_delegated(
        username.to_string(),
        format!("{}@test.local", username),
        String::new(),
        String::new(),
    );
    user.password_hash = Some(LocalAuthenticator::hash_password(password).expect("hash"));

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}

/// Give a user a profile with the specified role
pub async fn create_profile(pool: &SqlitePool, user_id: Uuid, role: Role) {
    sqlx::query(
        r#"
            INSERT INTO ams_profiles (id, user_id, external_id, role, department, faculty, updated_at)
            VALUES (?, ?, ?, ?, '', '', ?)
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id.to_string())
    .bind(user_id.to_string())
    .bind(role.as_str())
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test profile");
}

/// Issue a session directly, bypassing the login endpoint
pub async fn issue_session(pool: &SqlitePool, user_id: Uuid) -> Uuid {
    let session = Session::new(user_id, TEST_SESSION_TTL_SECS);

    SessionRepository::new(pool.clone())
        .create(&session)
        .await
        .expect("Failed to create test session");

    session.token
}

/// Create a test course owned by the given user, returning its id
pub async fn create_test_course(pool: &SqlitePool, created_by: Uuid) -> Uuid {
    let course_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO ams_courses (id, code, name, description, term, year, department, faculty, created_by, created_at, updated_at)
            VALUES (?, 'CS101', 'Intro to Computing', 'First course', '1', 2026, 'Computer Science', 'Science and Technology', ?, ?, ?)
        "#,
    )
    .bind(course_id.to_string())
    .bind(created_by.to_string())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test course");

    course_id
}
