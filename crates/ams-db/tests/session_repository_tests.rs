mod common;

use common::{create_test_pool, create_test_user};

use ams_core::Session;
use ams_db::SessionRepository;

use chrono::{Duration, Utc};
use googletest::prelude::*;

#[tokio::test]
async fn given_fresh_session_when_resolved_then_returns_session() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "6612345678").await;
    let repo = SessionRepository::new(pool.clone());

    let session = Session::new(user.id, 3600);
    repo.create(&session).await.unwrap();

    let result = repo.find_valid(session.token, Utc::now()).await.unwrap();

    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().user_id, eq(user.id));
}

#[tokio::test]
async fn given_expired_session_when_resolved_then_returns_none() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "6612345678").await;
    let repo = SessionRepository::new(pool.clone());

    let session = Session::new(user.id, 60);
    repo.create(&session).await.unwrap();

    let later = Utc::now() + Duration::seconds(120);
    let result = repo.find_valid(session.token, later).await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_deleted_session_when_resolved_then_returns_none() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "6612345678").await;
    let repo = SessionRepository::new(pool.clone());

    let session = Session::new(user.id, 3600);
    repo.create(&session).await.unwrap();

    assert_that!(repo.delete(session.token).await.unwrap(), eq(true));
    assert_that!(
        repo.find_valid(session.token, Utc::now()).await.unwrap(),
        none()
    );
    // Second delete is a no-op
    assert_that!(repo.delete(session.token).await.unwrap(), eq(false));
}

#[tokio::test]
async fn given_mixed_sessions_when_purged_then_only_expired_removed() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "6612345678").await;
    let repo = SessionRepository::new(pool.clone());

    let stale = Session::new(user.id, 60);
    let fresh = Session::new(user.id, 3600);
    repo.create(&stale).await.unwrap();
    repo.create(&fresh).await.unwrap();

    let later = Utc::now() + Duration::seconds(120);
    let removed = repo.delete_expired(later).await.unwrap();

    assert_that!(removed, eq(1));
    assert_that!(repo.find_valid(fresh.token, Utc::now()).await.unwrap(), some(anything()));
}
