use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::dashboard::AdminSummaryResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/summary",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team, jornada and match counts", body = AdminSummaryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an administrator")
    ),
    tag = "admin"
)]
pub async fn get_summary(State(db): State<Database>) -> Result<Response, WebError> {
    let summary = services::get_summary(db.pool()).await?;

    Ok(Json(summary).into_response())
}
