use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::team::{CreateTeamRequest, ResetPasswordRequest, TeamResponse},
    models::TeamId,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::SessionStore;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/teams",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All teams by name", body = Vec<TeamResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator")
    ),
    tag = "admin"
)]
pub async fn list_teams(State(db): State<Database>) -> Result<Response, WebError> {
    let teams = services::list_teams(db.pool()).await?;

    let response: Vec<TeamResponse> = teams.into_iter().map(TeamResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/teams",
    request_body = CreateTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team created", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator"),
        (status = 409, description = "Name or username already exists")
    ),
    tag = "admin"
)]
pub async fn create_team(
    State(db): State<Database>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/teams/{id}/toggle",
    params(
        ("id" = i64, Path, description = "Team id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Active flag flipped", body = TeamResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "Team not found")
    ),
    tag = "admin"
)]
pub async fn toggle_team(
    State(db): State<Database>,
    State(sessions): State<SessionStore>,
    Path(id): Path<TeamId>,
) -> Result<Response, WebError> {
    let team = services::toggle_team(db.pool(), id).await?;

    if !team.is_active {
        sessions.close_team(team.id).await;
    }

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/teams/{id}/password",
    params(
        ("id" = i64, Path, description = "Team id")
    ),
    request_body = ResetPasswordRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Password replaced"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "Team not found")
    ),
    tag = "admin"
)]
pub async fn reset_password(
    State(db): State<Database>,
    Path(id): Path<TeamId>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::reset_password(db.pool(), id, &req.new_password).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
