use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::{JornadaId, MatchId, MatchStatus, TeamId};

/// A match joined with its jornada and both team names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MatchDetail {
    pub id: MatchId,
    pub jornada_id: JornadaId,
    pub jornada_number: i64,
    pub date: NaiveDate,
    pub home_team_id: TeamId,
    pub home_name: String,
    pub away_team_id: TeamId,
    pub away_name: String,
    pub scheduled_at: Option<String>,
    pub status: MatchStatus,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub winner_one_player: bool,
    pub no_show_team_id: Option<TeamId>,
    pub submitted_by_team_id: Option<TeamId>,
    pub updated_at: Option<String>,
}

/// Result reported by one of the two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TeamResultReport {
    Score {
        home_score: i64,
        away_score: i64,
        #[serde(default)]
        winner_one_player: bool,
    },
    /// The reporting team's opponent did not turn up.
    OpponentNoShow,
}

/// Result entered by the administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdminResultReport {
    Score {
        home_score: i64,
        away_score: i64,
        #[serde(default)]
        winner_one_player: bool,
    },
    NoShow { team_id: TeamId },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateFixturesRequest {
    /// Delete every existing match before generating.
    #[serde(default)]
    pub reset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FixtureGenerationResponse {
    pub rounds: usize,
    pub jornadas: usize,
    pub matches_created: usize,
}
