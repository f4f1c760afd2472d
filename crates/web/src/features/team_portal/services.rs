use sqlx::SqlitePool;
use storage::{
    LeagueSettings,
    dto::{
        dashboard::TeamDashboardResponse,
        matches::{MatchDetail, TeamResultReport},
        team::TeamResponse,
    },
    error::{Result, StorageError},
    models::{MatchId, MatchStatus, TeamId},
    repository::{
        matches::{MatchOrder, MatchQuery, MatchRepository},
        team::TeamRepository,
    },
    services::results,
};

pub const DASHBOARD_LIMIT: i64 = 10;

/// The team's own fixtures: next scheduled, overdue for a result, and latest played.
pub async fn get_dashboard(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    team_id: TeamId,
) -> Result<TeamDashboardResponse> {
    let team = TeamRepository::new(pool).find_by_id(team_id).await?;
    let matches = MatchRepository::new(pool);

    let scheduled = MatchQuery {
        status: Some(MatchStatus::Scheduled),
        order: MatchOrder::Soonest,
        ..MatchQuery::default()
    }
    .for_team(team_id);

    let upcoming = matches
        .list(&MatchQuery {
            limit: Some(DASHBOARD_LIMIT),
            ..scheduled.clone()
        })
        .await?;
    let pending = matches
        .list(&MatchQuery {
            until_date: Some(settings.today()),
            ..scheduled
        })
        .await?;
    let recent = matches
        .list(&MatchQuery::recent(DASHBOARD_LIMIT).for_team(team_id))
        .await?;

    Ok(TeamDashboardResponse {
        team: TeamResponse::from(team),
        upcoming,
        pending,
        recent,
    })
}

/// A match the team plays in
pub async fn get_match(pool: &SqlitePool, team_id: TeamId, match_id: MatchId) -> Result<MatchDetail> {
    let detail = MatchRepository::new(pool).find_detail(match_id).await?;

    if detail.home_team_id != team_id && detail.away_team_id != team_id {
        return Err(StorageError::NotAllowed(
            "Cannot view another team's match".to_string(),
        ));
    }

    Ok(detail)
}

pub async fn submit_result(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    team_id: TeamId,
    match_id: MatchId,
    report: &TeamResultReport,
) -> Result<MatchDetail> {
    results::submit_team_result(pool, settings, match_id, team_id, report).await
}
