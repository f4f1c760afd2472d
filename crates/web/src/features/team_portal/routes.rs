use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{get_dashboard, get_match, submit_result};
use crate::middleware::auth::{SessionStore, require_team};
use crate::state::AppState;

pub fn routes(sessions: SessionStore) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/matches/:id", get(get_match))
        .route("/matches/:id/result", post(submit_result))
        .route_layer(middleware::from_fn_with_state(sessions, require_team))
}
