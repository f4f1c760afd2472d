use sqlx::SqlitePool;
use storage::{
    dto::auth::{LoginRequest, LoginResponse},
    repository::team::TeamRepository,
};

use crate::config::AdminCredentials;
use crate::credentials::verify_password;
use crate::error::{WebError, WebResult};
use crate::middleware::auth::{Session, SessionStore};

/// Resolve credentials to a session: the configured administrator first,
/// then an active team.
async fn authenticate(
    pool: &SqlitePool,
    admin: &AdminCredentials,
    request: &LoginRequest,
) -> WebResult<Session> {
    let username = request.username.trim();

    if username == admin.username {
        if request.password != admin.password {
            tracing::warn!("Failed administrator login");
            return Err(WebError::Unauthorized);
        }
        return Ok(Session::Admin);
    }

    let team = match TeamRepository::new(pool).find_by_username(username).await? {
        Some(team) if team.is_active => team,
        _ => {
            tracing::warn!(username, "Login for unknown or inactive team");
            return Err(WebError::Unauthorized);
        }
    };

    if !verify_password(&request.password, &team.password_hash)? {
        tracing::warn!(team_id = team.id, "Wrong team password");
        return Err(WebError::Unauthorized);
    }

    Ok(Session::Team(team.id))
}

pub async fn login(
    pool: &SqlitePool,
    admin: &AdminCredentials,
    sessions: &SessionStore,
    request: &LoginRequest,
) -> WebResult<LoginResponse> {
    let session = authenticate(pool, admin, request).await?;
    let token = sessions.open(session).await;

    tracing::info!(role = ?session.role(), "Session opened");

    Ok(LoginResponse {
        token,
        role: session.role(),
        team_id: match session {
            Session::Team(team_id) => Some(team_id),
            Session::Admin => None,
        },
    })
}

pub async fn logout(sessions: &SessionStore, token: &str) {
    if sessions.close(token).await {
        tracing::info!("Session closed");
    }
}
