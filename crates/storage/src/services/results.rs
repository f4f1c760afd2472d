use sqlx::SqlitePool;
use thiserror::Error;

use crate::dto::matches::{AdminResultReport, MatchDetail, TeamResultReport};
use crate::error::{Result, StorageError};
use crate::models::{Match, MatchId, TeamId};
use crate::repository::matches::{MatchRepository, StoredResult};
use crate::settings::LeagueSettings;

/// Highest score a single side may record.
pub const MAX_SCORE: i64 = 999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultError {
    #[error("Team {0} does not play in this match")]
    NotParticipant(TeamId),

    #[error("Team {0} is not one of the two sides of this match")]
    NoShowOutsideMatch(TeamId),

    #[error("Match already has a result")]
    AlreadyCompleted,

    #[error("Draws are not allowed; scores must differ")]
    Draw,

    #[error("Scores cannot be negative")]
    NegativeScore,

    #[error("Scores cannot exceed {MAX_SCORE}")]
    ScoreTooHigh,
}

impl From<ResultError> for StorageError {
    fn from(error: ResultError) -> Self {
        let message = error.to_string();
        match error {
            ResultError::NotParticipant(_) => StorageError::NotAllowed(message),
            ResultError::AlreadyCompleted => StorageError::ConstraintViolation(message),
            ResultError::NoShowOutsideMatch(_)
            | ResultError::Draw
            | ResultError::NegativeScore
            | ResultError::ScoreTooHigh => StorageError::InvalidInput(message),
        }
    }
}

fn scored(
    home_score: i64,
    away_score: i64,
    winner_one_player: bool,
) -> std::result::Result<StoredResult, ResultError> {
    if home_score < 0 || away_score < 0 {
        return Err(ResultError::NegativeScore);
    }
    if home_score > MAX_SCORE || away_score > MAX_SCORE {
        return Err(ResultError::ScoreTooHigh);
    }
    if home_score == away_score {
        return Err(ResultError::Draw);
    }

    Ok(StoredResult::Scored {
        home_score,
        away_score,
        winner_one_player,
    })
}

/// Checks a report from one of the two teams against the match it targets.
pub fn validate_team_report(
    m: &Match,
    team_id: TeamId,
    report: &TeamResultReport,
) -> std::result::Result<StoredResult, ResultError> {
    let opponent = m
        .opponent_of(team_id)
        .ok_or(ResultError::NotParticipant(team_id))?;

    if m.is_completed() {
        return Err(ResultError::AlreadyCompleted);
    }

    match *report {
        TeamResultReport::Score {
            home_score,
            away_score,
            winner_one_player,
        } => scored(home_score, away_score, winner_one_player),
        TeamResultReport::OpponentNoShow => Ok(StoredResult::NoShow { absent: opponent }),
    }
}

/// Checks an administrator's result. Completed matches may be overwritten.
pub fn validate_admin_report(
    m: &Match,
    report: &AdminResultReport,
) -> std::result::Result<StoredResult, ResultError> {
    match *report {
        AdminResultReport::Score {
            home_score,
            away_score,
            winner_one_player,
        } => scored(home_score, away_score, winner_one_player),
        AdminResultReport::NoShow { team_id } if m.involves(team_id) => {
            Ok(StoredResult::NoShow { absent: team_id })
        }
        AdminResultReport::NoShow { team_id } => Err(ResultError::NoShowOutsideMatch(team_id)),
    }
}

pub async fn submit_team_result(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    match_id: MatchId,
    team_id: TeamId,
    report: &TeamResultReport,
) -> Result<MatchDetail> {
    let repo = MatchRepository::new(pool);
    let m = repo.find(match_id).await?;

    let result = validate_team_report(&m, team_id, report)?;
    repo.record_result(match_id, &result, Some(team_id), &settings.now_local_iso())
        .await?;

    tracing::info!(match_id, team_id, ?result, "Team reported result");

    repo.find_detail(match_id).await
}

pub async fn submit_admin_result(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    match_id: MatchId,
    report: &AdminResultReport,
) -> Result<MatchDetail> {
    let repo = MatchRepository::new(pool);
    let m = repo.find(match_id).await?;

    let result = validate_admin_report(&m, report)?;
    repo.record_result(match_id, &result, None, &settings.now_local_iso())
        .await?;

    tracing::info!(match_id, ?result, "Administrator recorded result");

    repo.find_detail(match_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchStatus, matches::completed};

    fn scheduled(home: TeamId, away: TeamId) -> Match {
        Match {
            status: MatchStatus::Scheduled,
            ..completed(1, home, away)
        }
    }

    fn score(home_score: i64, away_score: i64) -> TeamResultReport {
        TeamResultReport::Score {
            home_score,
            away_score,
            winner_one_player: false,
        }
    }

    #[test]
    fn test_valid_score_report() {
        let result = validate_team_report(&scheduled(1, 2), 2, &score(0, 3)).unwrap();

        assert_eq!(
            result,
            StoredResult::Scored {
                home_score: 0,
                away_score: 3,
                winner_one_player: false
            }
        );
    }

    #[test]
    fn test_opponent_no_show_marks_the_other_side() {
        let m = scheduled(1, 2);

        assert_eq!(
            validate_team_report(&m, 1, &TeamResultReport::OpponentNoShow),
            Ok(StoredResult::NoShow { absent: 2 })
        );
        assert_eq!(
            validate_team_report(&m, 2, &TeamResultReport::OpponentNoShow),
            Ok(StoredResult::NoShow { absent: 1 })
        );
    }

    #[test]
    fn test_outsider_cannot_report() {
        assert_eq!(
            validate_team_report(&scheduled(1, 2), 3, &score(2, 1)),
            Err(ResultError::NotParticipant(3))
        );
    }

    #[test]
    fn test_completed_match_cannot_be_reported_again() {
        assert_eq!(
            validate_team_report(&completed(1, 1, 2), 1, &score(2, 1)),
            Err(ResultError::AlreadyCompleted)
        );
    }

    #[test]
    fn test_draws_and_negative_scores_are_rejected() {
        let m = scheduled(1, 2);

        assert_eq!(
            validate_team_report(&m, 1, &score(2, 2)),
            Err(ResultError::Draw)
        );
        assert_eq!(
            validate_team_report(&m, 1, &score(-1, 2)),
            Err(ResultError::NegativeScore)
        );
    }

    #[test]
    fn test_scores_above_the_cap_are_rejected() {
        let m = scheduled(1, 2);

        assert!(validate_team_report(&m, 1, &score(MAX_SCORE, 0)).is_ok());
        assert_eq!(
            validate_team_report(&m, 1, &score(MAX_SCORE + 1, 0)),
            Err(ResultError::ScoreTooHigh)
        );

        let huge = AdminResultReport::Score {
            home_score: i64::MAX,
            away_score: 0,
            winner_one_player: false,
        };
        assert_eq!(
            validate_admin_report(&completed(1, 1, 2), &huge),
            Err(ResultError::ScoreTooHigh)
        );
        assert!(matches!(
            StorageError::from(ResultError::ScoreTooHigh),
            StorageError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_admin_may_overwrite_and_must_name_a_participant() {
        let m = completed(1, 1, 2);

        assert_eq!(
            validate_admin_report(&m, &AdminResultReport::NoShow { team_id: 1 }),
            Ok(StoredResult::NoShow { absent: 1 })
        );
        assert_eq!(
            validate_admin_report(&m, &AdminResultReport::NoShow { team_id: 9 }),
            Err(ResultError::NoShowOutsideMatch(9))
        );
    }

    #[test]
    fn test_errors_map_to_storage_errors() {
        assert!(matches!(
            StorageError::from(ResultError::NotParticipant(3)),
            StorageError::NotAllowed(_)
        ));
        assert!(matches!(
            StorageError::from(ResultError::AlreadyCompleted),
            StorageError::ConstraintViolation(_)
        ));
        assert!(matches!(
            StorageError::from(ResultError::Draw),
            StorageError::InvalidInput(_)
        ));
    }
}
