use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use storage::{Database, LeagueSettings, dto::dashboard::OverviewResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/overview",
    responses(
        (status = 200, description = "Standings with upcoming and recent matches", body = OverviewResponse)
    ),
    tag = "league"
)]
pub async fn get_overview(
    State(db): State<Database>,
    State(settings): State<Arc<LeagueSettings>>,
) -> Result<Response, WebError> {
    let overview = services::get_overview(db.pool(), &settings).await?;

    Ok(Json(overview).into_response())
}
