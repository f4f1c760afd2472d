use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    delete_match, generate_fixtures, list_matches, list_matches_admin, record_result,
    reset_match,
};
use crate::middleware::auth::{SessionStore, require_admin};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_matches))
}

pub fn admin_routes(sessions: SessionStore) -> Router<AppState> {
    Router::new()
        .route("/", get(list_matches_admin))
        .route("/generate", post(generate_fixtures))
        .route("/:id", delete(delete_match))
        .route("/:id/result", put(record_result))
        .route("/:id/reset", post(reset_match))
        .route_layer(middleware::from_fn_with_state(sessions, require_admin))
}
