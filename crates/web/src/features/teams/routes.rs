use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{create_team, list_teams, reset_password, toggle_team};
use crate::middleware::auth::{SessionStore, require_admin};
use crate::state::AppState;

pub fn admin_routes(sessions: SessionStore) -> Router<AppState> {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/:id/toggle", post(toggle_team))
        .route("/:id/password", post(reset_password))
        .route_layer(middleware::from_fn_with_state(sessions, require_admin))
}
