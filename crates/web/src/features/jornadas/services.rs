use chrono::NaiveDate;
use sqlx::SqlitePool;
use storage::{
    LeagueSettings,
    dto::jornada::{JornadaWithMatches, ScheduleJornadasResponse},
    error::Result,
    models::Jornada,
    repository::jornada::JornadaRepository,
    services::calendar,
};

/// Calendar with every match, by jornada number
pub async fn list_with_matches(pool: &SqlitePool) -> Result<Vec<JornadaWithMatches>> {
    calendar::list_jornadas_with_matches(pool).await
}

pub async fn list_jornadas(pool: &SqlitePool) -> Result<Vec<Jornada>> {
    JornadaRepository::new(pool).list().await
}

/// Replace the calendar; existing matches are dropped with their jornadas
pub async fn schedule_jornadas(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    dates: &[Option<NaiveDate>],
) -> Result<ScheduleJornadasResponse> {
    calendar::schedule_jornadas(pool, settings, dates).await
}
