use axum::{Router, middleware, routing::get};

use super::handlers::get_summary;
use crate::features::{jornadas, matches, teams};
use crate::middleware::auth::{SessionStore, require_admin};
use crate::state::AppState;

pub fn routes(sessions: SessionStore) -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route_layer(middleware::from_fn_with_state(sessions.clone(), require_admin))
        .nest("/teams", teams::routes::admin_routes(sessions.clone()))
        .nest("/jornadas", jornadas::routes::admin_routes(sessions.clone()))
        .nest("/matches", matches::routes::admin_routes(sessions))
}
