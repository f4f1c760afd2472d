use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use storage::{
    Database, LeagueSettings,
    dto::jornada::{JornadaWithMatches, ScheduleJornadasRequest, ScheduleJornadasResponse},
    models::Jornada,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/jornadas",
    responses(
        (status = 200, description = "Every jornada with its matches", body = Vec<JornadaWithMatches>)
    ),
    tag = "league"
)]
pub async fn list_jornadas_with_matches(State(db): State<Database>) -> Result<Response, WebError> {
    let calendar = services::list_with_matches(db.pool()).await?;

    Ok(Json(calendar).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/jornadas",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Jornadas by number", body = Vec<Jornada>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator")
    ),
    tag = "admin"
)]
pub async fn list_jornadas(State(db): State<Database>) -> Result<Response, WebError> {
    let jornadas = services::list_jornadas(db.pool()).await?;

    Ok(Json(jornadas).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/jornadas",
    request_body = ScheduleJornadasRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Calendar replaced", body = ScheduleJornadasResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator")
    ),
    tag = "admin"
)]
pub async fn schedule_jornadas(
    State(db): State<Database>,
    State(settings): State<Arc<LeagueSettings>>,
    Json(req): Json<ScheduleJornadasRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let response = services::schedule_jornadas(db.pool(), &settings, &req.dates).await?;

    Ok(Json(response).into_response())
}
