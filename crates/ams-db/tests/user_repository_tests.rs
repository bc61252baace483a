mod common;

use common::{create_test_pool, create_test_user};

use ams_core::User;
use ams_db::UserRepository;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_created_user_when_found_by_id_then_fields_round_trip() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "6612345678").await;
    let repo = UserRepository::new(pool.clone());

    let result = repo.find_by_id(user.id).await.unwrap();

    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.username, eq("6612345678"));
    assert_that!(found.email, eq(&user.email));
    assert_that!(found.password_hash, none());
}

#[tokio::test]
async fn given_unknown_id_when_found_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());

    let result = repo.find_by_id(Uuid::new_v4()).await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_created_user_when_found_by_username_then_returns_user() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "6612345678").await;
    let repo = UserRepository::new(pool.clone());

    let result = repo.find_by_username("6612345678").await.unwrap();

    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().id, eq(user.id));
}

#[tokio::test]
async fn given_duplicate_username_when_created_then_unique_violation() {
    let pool = create_test_pool().await;
    create_test_user(&pool, "6612345678").await;
    let repo = UserRepository::new(pool.clone());

    let duplicate = User::new_delegated(
        "6612345678".to_string(),
        "other@example.ac.th".to_string(),
        String::new(),
        String::new(),
    );
    let result = repo.create(&duplicate).await;

    assert_that!(result.is_err(), eq(true));
    assert_that!(result.unwrap_err().is_unique_violation(), eq(true));
}

#[tokio::test]
async fn given_two_users_when_counted_then_returns_two() {
    let pool = create_test_pool().await;
    create_test_user(&pool, "6612345678").await;
    create_test_user(&pool, "6687654321").await;
    let repo = UserRepository::new(pool.clone());

    assert_that!(repo.count().await.unwrap(), eq(2));
}
