//! Role resolution policy - the single place a local role is decided.

use crate::RemoteIdentityRecord;

use ams_core::Role;

/// Map a remote identity record to a local role.
///
/// Pure and deterministic: employees land in admin when their
/// organization or department carries an IT/administrative marker,
/// otherwise teacher; students and anything unrecognized default to
/// student.
pub fn resolve_role(record: &RemoteIdentityRecord) -> Role {
    match record.user_type.to_lowercase().as_str() {
        "student" => Role::Student,
        "employee" => {
            let department = record.department.to_lowercase();
            let organization = record.organization.to_lowercase();

            if organization.contains("เทคโนโลยีสารสนเทศ")
                || department.contains("it")
                || department.contains("admin")
            {
                Role::Admin
            } else {
                Role::Teacher
            }
        }
        _ => Role::Student,
    }
}
