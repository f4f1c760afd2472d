use axum::{Router, middleware, routing::post};

use super::handlers::{login, logout};
use crate::middleware::auth::{SessionStore, require_session};
use crate::state::AppState;

pub fn routes(sessions: SessionStore) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(sessions, require_session));

    Router::new().route("/login", post(login)).merge(protected)
}
