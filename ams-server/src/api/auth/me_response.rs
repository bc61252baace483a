use crate::api::auth::{profile_dto::ProfileDto, user_dto::UserDto};

use serde::Serialize;

/// The calling principal with their reconciled profile, when one exists.
/// Local bootstrap accounts have no profile.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserDto,
    pub profile: Option<ProfileDto>,
}
