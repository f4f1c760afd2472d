//! Public views of the league, shaped for static publishing.
//!
//! Each record type carries only what a public page shows: no login names,
//! no submitter ids, no internal timestamps.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;
use storage::{
    LeagueSettings,
    dto::{matches::MatchDetail, standings::StandingRow},
    models::{JornadaId, MatchId, MatchStatus, TeamId},
    repository::matches::{MatchQuery, MatchRepository},
    services::{calendar::list_jornadas_with_matches, standings::load_standings},
};

use crate::error::Result;

pub const UPCOMING_LIMIT: i64 = 10;
pub const RECENT_LIMIT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingEntry {
    pub pos: usize,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub gf: i64,
    pub ga: i64,
    pub gd: i64,
    pub points: i64,
}

impl From<StandingRow> for StandingEntry {
    fn from(row: StandingRow) -> Self {
        Self {
            pos: row.pos,
            team_name: row.team_name,
            played: row.played,
            wins: row.wins,
            losses: row.losses,
            gf: row.gf,
            ga: row.ga,
            gd: row.gd,
            points: row.points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingEntry {
    pub jornada_id: JornadaId,
    pub date: NaiveDate,
    pub home_name: String,
    pub away_name: String,
}

impl From<MatchDetail> for UpcomingEntry {
    fn from(m: MatchDetail) -> Self {
        Self {
            jornada_id: m.jornada_id,
            date: m.date,
            home_name: m.home_name,
            away_name: m.away_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentEntry {
    pub jornada_id: JornadaId,
    pub date: NaiveDate,
    pub home_name: String,
    pub away_name: String,
    pub status: MatchStatus,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub winner_one_player: bool,
    pub no_show_team_id: Option<TeamId>,
}

impl From<MatchDetail> for RecentEntry {
    fn from(m: MatchDetail) -> Self {
        Self {
            jornada_id: m.jornada_id,
            date: m.date,
            home_name: m.home_name,
            away_name: m.away_name,
            status: m.status,
            home_score: m.home_score,
            away_score: m.away_score,
            winner_one_player: m.winner_one_player,
            no_show_team_id: m.no_show_team_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JornadaRef {
    pub id: JornadaId,
    pub number: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JornadaMatch {
    pub id: MatchId,
    pub status: MatchStatus,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub no_show_team_id: Option<TeamId>,
    pub home_name: String,
    pub away_name: String,
}

impl From<MatchDetail> for JornadaMatch {
    fn from(m: MatchDetail) -> Self {
        Self {
            id: m.id,
            status: m.status,
            home_score: m.home_score,
            away_score: m.away_score,
            no_show_team_id: m.no_show_team_id,
            home_name: m.home_name,
            away_name: m.away_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JornadaEntry {
    pub jornada: JornadaRef,
    pub matches: Vec<JornadaMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEntry {
    pub jornada_number: i64,
    pub date: NaiveDate,
    pub home_name: String,
    pub away_name: String,
    pub status: MatchStatus,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub winner_one_player: bool,
    pub no_show_team_id: Option<TeamId>,
}

impl From<MatchDetail> for MatchEntry {
    fn from(m: MatchDetail) -> Self {
        Self {
            jornada_number: m.jornada_number,
            date: m.date,
            home_name: m.home_name,
            away_name: m.away_name,
            status: m.status,
            home_score: m.home_score,
            away_score: m.away_score,
            winner_one_player: m.winner_one_player,
            no_show_team_id: m.no_show_team_id,
        }
    }
}

/// Everything the static site publishes, read in one pass.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub standings: Vec<StandingEntry>,
    pub upcoming: Vec<UpcomingEntry>,
    pub recent: Vec<RecentEntry>,
    pub jornadas: Vec<JornadaEntry>,
    pub matches: Vec<MatchEntry>,
}

fn convert<S, T: From<S>>(items: Vec<S>) -> Vec<T> {
    items.into_iter().map(T::from).collect()
}

impl Snapshot {
    pub async fn collect(pool: &SqlitePool, settings: &LeagueSettings) -> Result<Self> {
        let repo = MatchRepository::new(pool);

        let standings = load_standings(pool, settings.no_show_win_points).await?;
        let upcoming = repo
            .list(&MatchQuery::upcoming(settings.today(), UPCOMING_LIMIT))
            .await?;
        let recent = repo.list(&MatchQuery::recent(RECENT_LIMIT)).await?;
        let matches = repo.list_all().await?;

        let jornadas = list_jornadas_with_matches(pool)
            .await?
            .into_iter()
            .map(|entry| JornadaEntry {
                jornada: JornadaRef {
                    id: entry.jornada.id,
                    number: entry.jornada.number,
                    date: entry.jornada.date,
                },
                matches: convert(entry.matches),
            })
            .collect();

        tracing::debug!(
            teams = standings.len(),
            matches = matches.len(),
            "Snapshot collected"
        );

        Ok(Self {
            standings: convert(standings),
            upcoming: convert(upcoming),
            recent: convert(recent),
            jornadas,
            matches: convert(matches),
        })
    }
}
