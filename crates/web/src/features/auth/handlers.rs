use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::auth::{LoginRequest, LoginResponse};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::{SessionStore, SessionToken};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Wrong credentials, unknown or inactive team")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let response = services::login(state.db.pool(), &state.admin, &state.sessions, &req).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(sessions): State<SessionStore>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> Result<Response, WebError> {
    services::logout(&sessions, &token).await;

    Ok(StatusCode::NO_CONTENT.into_response())
}

