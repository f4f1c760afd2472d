use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{JornadaId, TeamId};

pub type MatchId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub id: MatchId,
    pub jornada_id: JornadaId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub scheduled_at: Option<String>,
    pub status: MatchStatus,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub winner_one_player: bool,
    pub no_show_team_id: Option<TeamId>,
    pub submitted_by_team_id: Option<TeamId>,
    pub updated_at: Option<String>,
}

/// How a match counts towards the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// `absent` did not turn up; `winner` takes the administrative win.
    NoShow { winner: TeamId, absent: TeamId },
    /// A scored result with a distinct winner.
    Decided {
        home_score: i64,
        away_score: i64,
        winner_one_player: bool,
    },
    /// Not completed, or completed with missing or level scores.
    Unresolved,
}

impl Match {
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn opponent_of(&self, team_id: TeamId) -> Option<TeamId> {
        if self.home_team_id == team_id {
            Some(self.away_team_id)
        } else if self.away_team_id == team_id {
            Some(self.home_team_id)
        } else {
            None
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn outcome(&self) -> MatchOutcome {
        if !self.is_completed() {
            return MatchOutcome::Unresolved;
        }

        if let Some(absent) = self.no_show_team_id {
            return match self.opponent_of(absent) {
                Some(winner) => MatchOutcome::NoShow { winner, absent },
                None => MatchOutcome::Unresolved,
            };
        }

        match (self.home_score, self.away_score) {
            (Some(home_score), Some(away_score)) if home_score != away_score => {
                MatchOutcome::Decided {
                    home_score,
                    away_score,
                    winner_one_player: self.winner_one_player,
                }
            }
            _ => MatchOutcome::Unresolved,
        }
    }
}

#[cfg(test)]
pub(crate) fn completed(id: MatchId, home: TeamId, away: TeamId) -> Match {
    Match {
        id,
        jornada_id: 1,
        home_team_id: home,
        away_team_id: away,
        scheduled_at: None,
        status: MatchStatus::Completed,
        home_score: None,
        away_score: None,
        winner_one_player: false,
        no_show_team_id: None,
        submitted_by_team_id: None,
        updated_at: None,
    }
}
