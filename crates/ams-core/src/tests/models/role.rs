use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Teacher.as_str(), "teacher");
    assert_eq!(Role::Student.as_str(), "student");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("teacher").unwrap(), Role::Teacher);
    assert_eq!(Role::from_str("student").unwrap(), Role::Student);
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn test_role_default_is_student() {
    assert_eq!(Role::default(), Role::Student);
}

#[test]
fn test_course_management_permission() {
    assert!(Role::Admin.can_manage_courses());
    assert!(Role::Teacher.can_manage_courses());
    assert!(!Role::Student.can_manage_courses());
}
