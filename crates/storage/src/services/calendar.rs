use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::dto::jornada::{JornadaWithMatches, ScheduleJornadasResponse};
use crate::error::Result;
use crate::repository::{jornada::JornadaRepository, matches::MatchRepository};
use crate::settings::LeagueSettings;

/// Fills missing dates with `today`, returning one warning per gap.
pub fn resolve_dates(dates: &[Option<NaiveDate>], today: NaiveDate) -> (Vec<NaiveDate>, Vec<String>) {
    let mut warnings = Vec::new();
    let resolved = dates
        .iter()
        .enumerate()
        .map(|(idx, date)| {
            date.unwrap_or_else(|| {
                warnings.push(format!("Missing date for jornada {}, using {today}", idx + 1));
                today
            })
        })
        .collect();

    (resolved, warnings)
}

/// Replaces the whole calendar. Existing matches go with their jornadas.
pub async fn schedule_jornadas(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    dates: &[Option<NaiveDate>],
) -> Result<ScheduleJornadasResponse> {
    let (dates, warnings) = resolve_dates(dates, settings.today());
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let jornadas = JornadaRepository::new(pool).replace_all(&dates).await?;
    tracing::info!(jornadas = jornadas.len(), "Calendar replaced");

    Ok(ScheduleJornadasResponse { jornadas, warnings })
}

/// Every jornada with its matches, by jornada number
pub async fn list_jornadas_with_matches(pool: &SqlitePool) -> Result<Vec<JornadaWithMatches>> {
    let jornadas = JornadaRepository::new(pool).list().await?;
    let matches = MatchRepository::new(pool);

    let mut result = Vec::with_capacity(jornadas.len());
    for jornada in jornadas {
        let matches = matches.list_by_jornada(jornada.id).await?;
        result.push(JornadaWithMatches { jornada, matches });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_resolve_dates_fills_gaps_with_today() {
        let today = date("2025-05-05");

        let (dates, warnings) = resolve_dates(&[Some(date("2025-05-01")), None], today);

        assert_eq!(dates, vec![date("2025-05-01"), today]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("jornada 2"));
    }

    #[tokio::test]
    async fn test_list_jornadas_with_matches_groups_by_jornada() {
        let db = test_support::database().await;
        test_support::seed_teams(&db, &["A", "B", "C", "D"]).await;
        test_support::seed_jornadas(&db, &["2025-01-10", "2025-01-17"]).await;
        crate::services::fixtures::generate_fixtures(db.pool(), &LeagueSettings::default(), false)
            .await
            .unwrap();

        let calendar = list_jornadas_with_matches(db.pool()).await.unwrap();

        assert_eq!(calendar.len(), 2);
        assert_eq!(calendar[0].jornada.number, 1);
        assert!(calendar.iter().all(|j| j.matches.len() == 2));
        assert!(
            calendar[1]
                .matches
                .iter()
                .all(|m| m.jornada_id == calendar[1].jornada.id)
        );
    }

    #[tokio::test]
    async fn test_schedule_jornadas_reports_warnings() {
        let db = test_support::database().await;

        let response = schedule_jornadas(
            db.pool(),
            &LeagueSettings::default(),
            &[Some(date("2025-09-01")), None, Some(date("2025-09-15"))],
        )
        .await
        .unwrap();

        assert_eq!(response.jornadas.len(), 3);
        assert_eq!(response.warnings.len(), 1);
        assert_eq!(response.jornadas[0].date, date("2025-09-01"));
    }
}
