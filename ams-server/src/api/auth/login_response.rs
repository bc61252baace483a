use crate::api::auth::user_dto::UserDto;

use serde::Serialize;

/// Successful login response: the bearer token plus the principal
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: i64,
    pub user: UserDto,
}
