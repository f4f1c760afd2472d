use sqlx::SqlitePool;
use storage::{
    LeagueSettings,
    dto::matches::{AdminResultReport, FixtureGenerationResponse, MatchDetail},
    error::Result,
    models::MatchId,
    repository::matches::MatchRepository,
    services::{fixtures, results},
};

/// All matches by jornada number
pub async fn list_matches(pool: &SqlitePool) -> Result<Vec<MatchDetail>> {
    MatchRepository::new(pool).list_all().await
}

pub async fn record_result(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    match_id: MatchId,
    report: &AdminResultReport,
) -> Result<MatchDetail> {
    results::submit_admin_result(pool, settings, match_id, report).await
}

/// Reopen a match
pub async fn reset_match(pool: &SqlitePool, match_id: MatchId) -> Result<MatchDetail> {
    let repo = MatchRepository::new(pool);
    repo.reset(match_id).await?;
    tracing::info!(match_id, "Match reopened");
    repo.find_detail(match_id).await
}

pub async fn delete_match(pool: &SqlitePool, match_id: MatchId) -> Result<()> {
    MatchRepository::new(pool).delete(match_id).await?;
    tracing::info!(match_id, "Match deleted");
    Ok(())
}

pub async fn generate_fixtures(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    reset: bool,
) -> Result<FixtureGenerationResponse> {
    fixtures::generate_fixtures(pool, settings, reset).await
}
