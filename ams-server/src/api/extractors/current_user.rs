//! Axum extractor resolving a bearer token to the calling user.

use crate::api::error::ApiError;
use crate::app_state::AppState;

use ams_core::User;
use ams_db::{SessionRepository, UserRepository};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// The authenticated principal for a request.
///
/// Resolves `Authorization: Bearer <token>` against the session store
/// and loads the owning user. Expired or unknown tokens reject with
/// 401; the token is kept so logout can invalidate exactly the session
/// that authenticated the call.
pub struct CurrentUser {
    pub user: User,
    pub token: Uuid,
}

/// Pull the bearer token out of the Authorization header, if any.
fn bearer_token(parts: &Parts) -> Option<Uuid> {
    let value = parts.headers.get(http::header::AUTHORIZATION)?;
    let value = value.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(parts)
                .ok_or_else(|| ApiError::unauthorized("Missing or malformed bearer token"))?;

            let sessions = SessionRepository::new(state.pool.clone());
            let session = sessions
                .find_valid(token, chrono::Utc::now())
                .await?
                .ok_or_else(|| ApiError::unauthorized("Invalid or expired session"))?;

            let users = UserRepository::new(state.pool.clone());
            let user = users.find_by_id(session.user_id).await?.ok_or_else(|| {
                // Session row outlived its user; treat as unauthenticated
                log::warn!("Session {} references missing user {}", token, session.user_id);
                ApiError::unauthorized("Invalid or expired session")
            })?;

            Ok(CurrentUser { user, token })
        }
    }
}
