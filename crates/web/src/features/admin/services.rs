use sqlx::SqlitePool;
use storage::{
    dto::dashboard::AdminSummaryResponse,
    error::Result,
    repository::{jornada::JornadaRepository, matches::MatchRepository, team::TeamRepository},
};

pub async fn get_summary(pool: &SqlitePool) -> Result<AdminSummaryResponse> {
    Ok(AdminSummaryResponse {
        team_count: TeamRepository::new(pool).count().await?,
        jornada_count: JornadaRepository::new(pool).count().await?,
        match_count: MatchRepository::new(pool).count().await?,
    })
}
