#![allow(dead_code)]

use ams_auth::{IdentityProvider, RemoteIdentityRecord};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

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

/// Creates a file-backed pool with several connections, for tests that
/// need real write concurrency. The TempDir must outlive the pool.
pub async fn create_concurrent_test_pool() -> (SqlitePool, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("test.db"))
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ams_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    (pool, dir)
}

/// Canned identity provider that counts calls, for asserting how often
/// (and whether) the network boundary was hit.
pub struct StubProvider {
    response: Option<RemoteIdentityRecord>,
    verify_calls: AtomicUsize,
}

impl StubProvider {
    pub fn accepting(record: RemoteIdentityRecord) -> Self {
        Self {
            response: Some(record),
            verify_calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            response: None,
            verify_calls: AtomicUsize::new(0),
        }
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for StubProvider {
    async fn verify_credentials(
        &self,
        _username: &str,
        _password: &str,
    ) -> Option<RemoteIdentityRecord> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    async fn get_profile(&self, _external_id: &str) -> Option<RemoteIdentityRecord> {
        self.response.clone()
    }
}

/// A plausible verification payload for a student account
pub fn student_record(username: &str) -> RemoteIdentityRecord {
    RemoteIdentityRecord {
        username: username.to_string(),
        tu_id: Some(username.to_string()),
        email: format!("{}@example.ac.th", username),
        displayname_th: "สมชาย ใจดี".to_string(),
        displayname_en: "Somchai Jaidee".to_string(),
        user_type: "student".to_string(),
        faculty: "Engineering".to_string(),
        department: "Computer Engineering".to_string(),
        ..Default::default()
    }
}
