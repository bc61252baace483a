//! Authentication endpoints: login, logout, and the current principal.

use crate::api::auth::{
    login_request::LoginRequest, login_response::LoginResponse, me_response::MeResponse,
};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::app_state::AppState;

use ams_core::Session;
use ams_db::{ProfileRepository, SessionRepository};

use axum::{Json, extract::State, http::StatusCode};

/// Every login failure reads identically to the client. Rejected
/// credentials and an unreachable identity service must not be
/// distinguishable from the outside.
const LOGIN_FAILURE_MESSAGE: &str = "invalid credentials or identity service unavailable";

/// POST /api/v1/auth/login
///
/// Run the credential pair through the authenticator chain and issue a
/// session token on success.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state
        .authenticators
        .authenticate(&request.username, &request.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized(LOGIN_FAILURE_MESSAGE))?;

    let session = Session::new(user.id, state.session_ttl_secs);
    SessionRepository::new(state.pool.clone())
        .create(&session)
        .await?;

    log::info!("Session issued for {}", user.username);

    Ok(Json(LoginResponse {
        token: session.token.to_string(),
        expires_at: session.expires_at.timestamp(),
        user: user.into(),
    }))
}

/// POST /api/v1/auth/logout
///
/// Invalidate the session that authenticated this request.
pub async fn logout(State(state): State<AppState>, current: CurrentUser) -> ApiResult<StatusCode> {
    SessionRepository::new(state.pool.clone())
        .delete(current.token)
        .await?;

    log::info!("Session revoked for {}", current.user.username);

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// Return the calling user together with their reconciled profile.
pub async fn me(State(state): State<AppState>, current: CurrentUser) -> ApiResult<Json<MeResponse>> {
    let profile = ProfileRepository::new(state.pool.clone())
        .find_by_user_id(current.user.id)
        .await?;

    Ok(Json(MeResponse {
        user: current.user.into(),
        profile: profile.map(Into::into),
    }))
}
