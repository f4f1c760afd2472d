use axum::extract::FromRef;
use std::sync::Arc;
use storage::{Database, LeagueSettings};

use crate::config::AdminCredentials;
use crate::middleware::auth::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub settings: Arc<LeagueSettings>,
    pub admin: Arc<AdminCredentials>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(db: Database, settings: LeagueSettings, admin: AdminCredentials) -> Self {
        Self {
            db,
            settings: Arc::new(settings),
            admin: Arc::new(admin),
            sessions: SessionStore::default(),
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<LeagueSettings> {
    fn from_ref(state: &AppState) -> Self {
        state.settings.clone()
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
