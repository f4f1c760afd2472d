use axum::{Router, middleware, routing::get};

use super::handlers::{list_jornadas, list_jornadas_with_matches, schedule_jornadas};
use crate::middleware::auth::{SessionStore, require_admin};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_jornadas_with_matches))
}

pub fn admin_routes(sessions: SessionStore) -> Router<AppState> {
    Router::new()
        .route("/", get(list_jornadas).put(schedule_jornadas))
        .route_layer(middleware::from_fn_with_state(sessions, require_admin))
}
