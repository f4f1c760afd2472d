use sqlx::SqlitePool;
use storage::{
    LeagueSettings,
    dto::dashboard::OverviewResponse,
    error::Result,
    repository::matches::{MatchQuery, MatchRepository},
    services::standings::load_standings,
};

pub const OVERVIEW_LIMIT: i64 = 10;

/// Table, the next scheduled matches and the latest results.
pub async fn get_overview(pool: &SqlitePool, settings: &LeagueSettings) -> Result<OverviewResponse> {
    let matches = MatchRepository::new(pool);

    Ok(OverviewResponse {
        standings: load_standings(pool, settings.no_show_win_points).await?,
        upcoming: matches
            .list(&MatchQuery::upcoming(settings.today(), OVERVIEW_LIMIT))
            .await?,
        recent: matches.list(&MatchQuery::recent(OVERVIEW_LIMIT)).await?,
    })
}
