use std::{cmp::Ordering, collections::HashMap};

use sqlx::SqlitePool;

use crate::dto::standings::StandingRow;
use crate::error::Result;
use crate::models::{Match, MatchOutcome, TeamId, TeamSummary};
use crate::repository::{matches::MatchRepository, team::TeamRepository};

const WIN_POINTS: i64 = 3;
const WIN_ONE_PLAYER_POINTS: i64 = 2;
const LOSS_POINTS: i64 = 1;

/// Running totals for one team. Tallies combine by field-wise addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    played: u32,
    wins: u32,
    losses: u32,
    no_shows: u32,
    goals_for: i64,
    goals_against: i64,
    points: i64,
}

impl Tally {
    fn combine(self, other: Tally) -> Tally {
        Tally {
            played: self.played + other.played,
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            no_shows: self.no_shows + other.no_shows,
            goals_for: self.goals_for + other.goals_for,
            goals_against: self.goals_against + other.goals_against,
            points: self.points + other.points,
        }
    }

    fn goal_difference(&self) -> i64 {
        self.goals_for - self.goals_against
    }

    fn appearance() -> Tally {
        Tally {
            played: 1,
            ..Tally::default()
        }
    }
}

/// Ordered ranking keys, all descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankCriteria {
    Points,
    GoalDifference,
    GoalsFor,
}

pub const RANK_CRITERIA: [RankCriteria; 3] = [
    RankCriteria::Points,
    RankCriteria::GoalDifference,
    RankCriteria::GoalsFor,
];

impl RankCriteria {
    fn compare(&self, a: &StandingRow, b: &StandingRow) -> Ordering {
        match self {
            Self::Points => b.points.cmp(&a.points),
            Self::GoalDifference => b.gd.cmp(&a.gd),
            Self::GoalsFor => b.gf.cmp(&a.gf),
        }
    }
}

fn compare_rows(a: &StandingRow, b: &StandingRow) -> Ordering {
    RANK_CRITERIA
        .iter()
        .map(|criteria| criteria.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// What a single completed match contributes to each of its two teams.
fn match_contributions(m: &Match, no_show_win_points: i64) -> [(TeamId, Tally); 2] {
    let mut home = Tally::appearance();
    let mut away = Tally::appearance();

    match m.outcome() {
        MatchOutcome::NoShow { winner, absent } => {
            let won = Tally {
                wins: 1,
                points: no_show_win_points,
                ..Tally::appearance()
            };
            let forfeited = Tally {
                losses: 1,
                no_shows: 1,
                ..Tally::appearance()
            };
            return [(winner, won), (absent, forfeited)];
        }
        MatchOutcome::Unresolved => {}
        MatchOutcome::Decided {
            home_score,
            away_score,
            winner_one_player,
        } => {
            home.goals_for = home_score;
            home.goals_against = away_score;
            away.goals_for = away_score;
            away.goals_against = home_score;

            let winner_points = if winner_one_player {
                WIN_ONE_PLAYER_POINTS
            } else {
                WIN_POINTS
            };
            let (winner, loser) = if home_score > away_score {
                (&mut home, &mut away)
            } else {
                (&mut away, &mut home)
            };
            winner.wins = 1;
            winner.points = winner_points;
            loser.losses = 1;
            loser.points = LOSS_POINTS;
        }
    }

    [(m.home_team_id, home), (m.away_team_id, away)]
}

/// Builds the league table from scratch.
///
/// Every active team gets a row, even without matches. Only completed matches
/// count; a completed match with missing or level scores still counts as
/// played but adds nothing else. Teams that are not active are left out of the
/// table, and their side of a match is dropped.
///
/// Rows are ranked by points, goal difference and goals for, all descending.
/// Remaining ties keep the order in which `teams` was given.
pub fn compute_standings(
    teams: &[TeamSummary],
    matches: &[Match],
    no_show_win_points: i64,
) -> Vec<StandingRow> {
    let active: Vec<&TeamSummary> = teams.iter().filter(|t| t.is_active).collect();

    let initial: HashMap<TeamId, Tally> =
        active.iter().map(|t| (t.id, Tally::default())).collect();

    let tallies = matches
        .iter()
        .filter(|m| m.is_completed())
        .flat_map(|m| match_contributions(m, no_show_win_points))
        .fold(initial, |mut acc, (team_id, contribution)| {
            if let Some(tally) = acc.get_mut(&team_id) {
                *tally = tally.combine(contribution);
            }
            acc
        });

    let mut rows: Vec<StandingRow> = active
        .into_iter()
        .map(|team| {
            let tally = tallies.get(&team.id).copied().unwrap_or_default();
            StandingRow {
                pos: 0,
                team_id: team.id,
                team_name: team.name.clone(),
                played: tally.played,
                wins: tally.wins,
                losses: tally.losses,
                no_shows: tally.no_shows,
                gf: tally.goals_for,
                ga: tally.goals_against,
                gd: tally.goal_difference(),
                points: tally.points,
            }
        })
        .collect();

    rows.sort_by(compare_rows);

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| StandingRow { pos: idx + 1, ..row })
        .collect()
}

/// Loads active teams and completed matches and computes the table.
pub async fn load_standings(pool: &SqlitePool, no_show_win_points: i64) -> Result<Vec<StandingRow>> {
    let teams = TeamRepository::new(pool).list_active_summaries().await?;
    let matches = MatchRepository::new(pool).list_completed().await?;

    tracing::debug!(
        teams = teams.len(),
        matches = matches.len(),
        "Computing standings"
    );

    Ok(compute_standings(&teams, &matches, no_show_win_points))
}
