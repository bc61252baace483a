use crate::Session;

use chrono::{Duration, Utc};
use uuid::Uuid;

#[test]
fn test_new_session_is_not_expired() {
    let session = Session::new(Uuid::new_v4(), 3600);

    assert!(!session.is_expired(Utc::now()));
}

#[test]
fn test_session_expires_after_ttl() {
    let session = Session::new(Uuid::new_v4(), 60);

    assert!(session.is_expired(Utc::now() + Duration::seconds(61)));
}

#[test]
fn test_session_tokens_are_unique() {
    let user_id = Uuid::new_v4();
    let a = Session::new(user_id, 3600);
    let b = Session::new(user_id, 3600);

    assert_ne!(a.token, b.token);
}
