use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub type TeamId = i64;

/// Full team row, including login credentials. Never serialized directly.
#[derive(Debug, Clone, FromRow)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}

/// The part of a team the standings and fixture code care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    pub is_active: bool,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            is_active: team.is_active,
        }
    }
}
