use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use storage::{
    Database, LeagueSettings,
    dto::{
        dashboard::TeamDashboardResponse,
        matches::{MatchDetail, TeamResultReport},
    },
    models::MatchId,
};

use crate::error::WebError;
use crate::middleware::auth::CurrentTeam;

use super::services;

#[utoipa::path(
    get,
    path = "/api/team/dashboard",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The logged-in team's fixtures", body = TeamDashboardResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a team session")
    ),
    tag = "team"
)]
pub async fn get_dashboard(
    State(db): State<Database>,
    State(settings): State<Arc<LeagueSettings>>,
    Extension(CurrentTeam(team_id)): Extension<CurrentTeam>,
) -> Result<Response, WebError> {
    let dashboard = services::get_dashboard(db.pool(), &settings, team_id).await?;

    Ok(Json(dashboard).into_response())
}

#[utoipa::path(
    get,
    path = "/api/team/matches/{id}",
    params(
        ("id" = i64, Path, description = "Match id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match found", body = MatchDetail),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "The team does not play this match"),
        (status = 404, description = "Match not found")
    ),
    tag = "team"
)]
pub async fn get_match(
    State(db): State<Database>,
    Extension(CurrentTeam(team_id)): Extension<CurrentTeam>,
    Path(id): Path<MatchId>,
) -> Result<Response, WebError> {
    let detail = services::get_match(db.pool(), team_id, id).await?;

    Ok(Json(detail).into_response())
}

#[utoipa::path(
    post,
    path = "/api/team/matches/{id}/result",
    params(
        ("id" = i64, Path, description = "Match id")
    ),
    request_body = TeamResultReport,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result stored", body = MatchDetail),
        (status = 400, description = "Draw or negative score"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "The team does not play this match"),
        (status = 404, description = "Match not found"),
        (status = 409, description = "Match already has a result")
    ),
    tag = "team"
)]
pub async fn submit_result(
    State(db): State<Database>,
    State(settings): State<Arc<LeagueSettings>>,
    Extension(CurrentTeam(team_id)): Extension<CurrentTeam>,
    Path(id): Path<MatchId>,
    Json(report): Json<TeamResultReport>,
) -> Result<Response, WebError> {
    let updated = services::submit_result(db.pool(), &settings, team_id, id, &report).await?;

    Ok(Json(updated).into_response())
}
