use sqlx::SqlitePool;
use storage::{dto::standings::StandingRow, error::Result, services::standings::load_standings};

/// Current league table
pub async fn get_standings(pool: &SqlitePool, no_show_win_points: i64) -> Result<Vec<StandingRow>> {
    load_standings(pool, no_show_win_points).await
}
