pub mod admin;
pub mod auth;
pub mod jornadas;
pub mod matches;
pub mod overview;
pub mod standings;
pub mod team_portal;
pub mod teams;

use axum::Router;

use crate::state::AppState;

/// Every `/api` route, public and protected.
pub fn router(state: AppState) -> Router {
    let sessions = state.sessions.clone();

    let api = Router::new()
        .nest("/overview", overview::routes::routes())
        .nest("/standings", standings::routes::routes())
        .nest("/jornadas", jornadas::routes::routes())
        .nest("/matches", matches::routes::routes())
        .nest("/auth", auth::routes::routes(sessions.clone()))
        .nest("/team", team_portal::routes::routes(sessions.clone()))
        .nest("/admin", admin::routes::routes(sessions));

    Router::new().nest("/api", api).with_state(state)
}
