use crate::User;

#[test]
fn test_delegated_user_has_unusable_password() {
    let user = User::new_delegated(
        "6612345678".to_string(),
        "somchai@example.ac.th".to_string(),
        "Somchai".to_string(),
        "Jaidee".to_string(),
    );

    assert!(!user.has_usable_password());
    assert_eq!(user.username, "6612345678");
}
