use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use storage::{
    Database, LeagueSettings,
    dto::matches::{
        AdminResultReport, FixtureGenerationResponse, GenerateFixturesRequest, MatchDetail,
    },
    models::MatchId,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/matches",
    responses(
        (status = 200, description = "Every match by jornada number", body = Vec<MatchDetail>)
    ),
    tag = "league"
)]
pub async fn list_matches(State(db): State<Database>) -> Result<Response, WebError> {
    let matches = services::list_matches(db.pool()).await?;

    Ok(Json(matches).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/matches",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Every match by jornada number", body = Vec<MatchDetail>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator")
    ),
    tag = "admin"
)]
pub async fn list_matches_admin(State(db): State<Database>) -> Result<Response, WebError> {
    let matches = services::list_matches(db.pool()).await?;

    Ok(Json(matches).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/matches/{id}/result",
    params(
        ("id" = i64, Path, description = "Match id")
    ),
    request_body = AdminResultReport,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result stored", body = MatchDetail),
        (status = 400, description = "Draw, negative score or absent team outside the match"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "Match not found")
    ),
    tag = "admin"
)]
pub async fn record_result(
    State(db): State<Database>,
    State(settings): State<Arc<LeagueSettings>>,
    Path(id): Path<MatchId>,
    Json(report): Json<AdminResultReport>,
) -> Result<Response, WebError> {
    let updated = services::record_result(db.pool(), &settings, id, &report).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/matches/{id}/reset",
    params(
        ("id" = i64, Path, description = "Match id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match reopened", body = MatchDetail),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "Match not found")
    ),
    tag = "admin"
)]
pub async fn reset_match(
    State(db): State<Database>,
    Path(id): Path<MatchId>,
) -> Result<Response, WebError> {
    let reopened = services::reset_match(db.pool(), id).await?;

    Ok(Json(reopened).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/matches/{id}",
    params(
        ("id" = i64, Path, description = "Match id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator"),
        (status = 404, description = "Match not found")
    ),
    tag = "admin"
)]
pub async fn delete_match(
    State(db): State<Database>,
    Path(id): Path<MatchId>,
) -> Result<Response, WebError> {
    services::delete_match(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/matches/generate",
    request_body = GenerateFixturesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Fixtures generated", body = FixtureGenerationResponse),
        (status = 400, description = "Fewer than two active teams or no jornadas"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator")
    ),
    tag = "admin"
)]
pub async fn generate_fixtures(
    State(db): State<Database>,
    State(settings): State<Arc<LeagueSettings>>,
    body: Option<Json<GenerateFixturesRequest>>,
) -> Result<Response, WebError> {
    let reset = body.is_some_and(|Json(req)| req.reset);

    let generated = services::generate_fixtures(db.pool(), &settings, reset).await?;

    Ok((StatusCode::CREATED, Json(generated)).into_response())
}
