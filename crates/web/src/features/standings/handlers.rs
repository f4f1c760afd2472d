use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use storage::{Database, LeagueSettings, dto::standings::StandingRow};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/standings",
    responses(
        (status = 200, description = "League table, best first", body = Vec<StandingRow>)
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(db): State<Database>,
    State(settings): State<Arc<LeagueSettings>>,
) -> Result<Response, WebError> {
    let table = services::get_standings(db.pool(), settings.no_show_win_points).await?;

    Ok(Json(table).into_response())
}
