mod common;

use common::{create_test_course, create_test_pool, create_test_user};

use ams_core::EnrollmentStatus;
use ams_db::EnrollmentRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_student_when_enrolled_then_enrollment_is_active() {
    let pool = create_test_pool().await;
    let teacher = create_test_user(&pool, "teacher01").await;
    let student = create_test_user(&pool, "6612345678").await;
    let course = create_test_course(&pool, &teacher).await;
    let repo = EnrollmentRepository::new(pool.clone());

    let enrollment = repo.enroll(course.id, student.id).await.unwrap();

    assert_that!(enrollment.status, eq(EnrollmentStatus::Enrolled));
    assert_that!(repo.is_enrolled(course.id, student.id).await.unwrap(), eq(true));
}

#[tokio::test]
async fn given_enrolled_student_when_enrolled_again_then_single_row() {
    let pool = create_test_pool().await;
    let teacher = create_test_user(&pool, "teacher01").await;
    let student = create_test_user(&pool, "6612345678").await;
    let course = create_test_course(&pool, &teacher).await;
    let repo = EnrollmentRepository::new(pool.clone());

    let first = repo.enroll(course.id, student.id).await.unwrap();
    let second = repo.enroll(course.id, student.id).await.unwrap();

    // The conflict branch keeps the original row
    assert_that!(second.id, eq(first.id));
    assert_that!(repo.list_for_course(course.id).await.unwrap().len(), eq(1));
}

#[tokio::test]
async fn given_withdrawn_student_when_reenrolled_then_active_again() {
    let pool = create_test_pool().await;
    let teacher = create_test_user(&pool, "teacher01").await;
    let student = create_test_user(&pool, "6612345678").await;
    let course = create_test_course(&pool, &teacher).await;
    let repo = EnrollmentRepository::new(pool.clone());

    repo.enroll(course.id, student.id).await.unwrap();
    assert_that!(repo.withdraw(course.id, student.id).await.unwrap(), eq(true));
    assert_that!(repo.is_enrolled(course.id, student.id).await.unwrap(), eq(false));

    let reenrolled = repo.enroll(course.id, student.id).await.unwrap();

    assert_that!(reenrolled.status, eq(EnrollmentStatus::Enrolled));
}

#[tokio::test]
async fn given_no_enrollment_when_withdrawn_then_returns_false() {
    let pool = create_test_pool().await;
    let teacher = create_test_user(&pool, "teacher01").await;
    let student = create_test_user(&pool, "6612345678").await;
    let course = create_test_course(&pool, &teacher).await;
    let repo = EnrollmentRepository::new(pool.clone());

    assert_that!(repo.withdraw(course.id, student.id).await.unwrap(), eq(false));
}
