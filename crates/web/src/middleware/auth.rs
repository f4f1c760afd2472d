use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::{collections::HashMap, sync::Arc};
use storage::{dto::auth::Role, models::TeamId};
use tokio::sync::RwLock;

use crate::credentials::new_session_token;
use crate::error::WebError;

/// Who a bearer token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Admin,
    Team(TeamId),
}

impl Session {
    pub fn role(&self) -> Role {
        match self {
            Session::Admin => Role::Admin,
            Session::Team(_) => Role::Team,
        }
    }
}

/// The raw token of the authenticated request, kept so it can be revoked.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Team behind a team-portal request.
#[derive(Debug, Clone, Copy)]
pub struct CurrentTeam(pub TeamId);

/// Live sessions keyed by token. Lost on restart.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub async fn open(&self, session: Session) -> String {
        let token = new_session_token();
        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).copied()
    }

    pub async fn close(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Drops every session of a team, e.g. after it is deactivated.
    pub async fn close_team(&self, team_id: TeamId) {
        self.sessions
            .write()
            .await
            .retain(|_, session| *session != Session::Team(team_id));
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

async fn authenticate(sessions: &SessionStore, req: &mut Request) -> Result<Session, WebError> {
    let token = bearer_token(req.headers())
        .ok_or(WebError::Unauthorized)?
        .to_string();

    let session = sessions.get(&token).await.ok_or_else(|| {
        tracing::warn!("Request with unknown session token");
        WebError::Unauthorized
    })?;

    req.extensions_mut().insert(session);
    req.extensions_mut().insert(SessionToken(token));
    Ok(session)
}

/// Any logged-in user.
pub async fn require_session(
    State(sessions): State<SessionStore>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    authenticate(&sessions, &mut req).await?;
    Ok(next.run(req).await)
}

pub async fn require_admin(
    State(sessions): State<SessionStore>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    match authenticate(&sessions, &mut req).await? {
        Session::Admin => Ok(next.run(req).await),
        Session::Team(_) => Err(WebError::Forbidden("Administrator access required".into())),
    }
}

pub async fn require_team(
    State(sessions): State<SessionStore>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    match authenticate(&sessions, &mut req).await? {
        Session::Team(team_id) => {
            req.extensions_mut().insert(CurrentTeam(team_id));
            Ok(next.run(req).await)
        }
        Session::Admin => Err(WebError::Forbidden("Team login required".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_open_get_close() {
        let store = SessionStore::default();
        let token = store.open(Session::Team(4)).await;

        assert_eq!(store.get(&token).await, Some(Session::Team(4)));
        assert!(store.close(&token).await);
        assert_eq!(store.get(&token).await, None);
        assert!(!store.close(&token).await);
    }

    #[tokio::test]
    async fn test_close_team_keeps_other_sessions() {
        let store = SessionStore::default();
        let admin = store.open(Session::Admin).await;
        let first = store.open(Session::Team(1)).await;
        let second = store.open(Session::Team(2)).await;

        store.close_team(1).await;

        assert_eq!(store.get(&first).await, None);
        assert_eq!(store.get(&second).await, Some(Session::Team(2)));
        assert_eq!(store.get(&admin).await, Some(Session::Admin));
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok_abc"));
        assert_eq!(bearer_token(&headers), Some("tok_abc"));
    }
}
