use sqlx::SqlitePool;

use super::round_robin::{extend_over_days, round_robin_pairings};
use crate::dto::matches::FixtureGenerationResponse;
use crate::error::{Result, StorageError};
use crate::models::{Jornada, TeamId};
use crate::repository::{
    jornada::JornadaRepository,
    matches::{MatchRepository, NewFixture},
    team::TeamRepository,
};
use crate::settings::LeagueSettings;

/// One round per jornada, in jornada order; rounds are replayed with sides
/// swapped when the calendar is longer than a single round robin.
pub fn plan_fixtures(
    team_ids: &[TeamId],
    jornadas: &[Jornada],
    settings: &LeagueSettings,
) -> Vec<NewFixture> {
    let rounds = round_robin_pairings(team_ids);

    jornadas
        .iter()
        .zip(extend_over_days(&rounds, jornadas.len()))
        .flat_map(|(jornada, pairs)| {
            let scheduled_at = settings.kickoff_on(jornada.date);
            pairs.into_iter().map(move |(home, away)| NewFixture {
                jornada_id: jornada.id,
                home_team_id: home,
                away_team_id: away,
                scheduled_at: scheduled_at.clone(),
            })
        })
        .collect()
}

/// Builds the season's fixtures from the active teams and the calendar.
pub async fn generate_fixtures(
    pool: &SqlitePool,
    settings: &LeagueSettings,
    reset: bool,
) -> Result<FixtureGenerationResponse> {
    let team_ids = TeamRepository::new(pool).list_active_ids().await?;
    let jornadas = JornadaRepository::new(pool).list().await?;

    if team_ids.len() < 2 || jornadas.is_empty() {
        return Err(StorageError::InvalidInput(
            "At least two active teams and one jornada are required".to_string(),
        ));
    }

    let fixtures = plan_fixtures(&team_ids, &jornadas, settings);
    let matches_created = MatchRepository::new(pool)
        .insert_fixtures(reset, &fixtures)
        .await?;
    let rounds = round_robin_pairings(&team_ids).len();

    tracing::info!(
        teams = team_ids.len(),
        jornadas = jornadas.len(),
        rounds,
        matches_created,
        "Fixtures generated"
    );

    Ok(FixtureGenerationResponse {
        rounds,
        jornadas: jornadas.len(),
        matches_created,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use chrono::NaiveDate;

    fn jornada(id: i64, date: &str) -> Jornada {
        Jornada {
            id,
            number: id,
            date: date.parse::<NaiveDate>().unwrap(),
        }
    }

    #[test]
    fn test_plan_assigns_one_round_per_jornada() {
        let jornadas = vec![jornada(10, "2025-01-10"), jornada(11, "2025-01-17")];

        let plan = plan_fixtures(&[1, 2, 3, 4], &jornadas, &LeagueSettings::default());

        assert_eq!(plan.len(), 4);
        assert!(plan[..2].iter().all(|f| f.jornada_id == 10));
        assert!(plan[2..].iter().all(|f| f.jornada_id == 11));
        assert_eq!(plan[0].scheduled_at, "2025-01-10 22:30:00");
        assert_eq!((plan[0].home_team_id, plan[0].away_team_id), (1, 4));
    }

    #[test]
    fn test_plan_second_leg_swaps_sides() {
        let jornadas: Vec<Jornada> = (1..=2)
            .map(|i| jornada(i, &format!("2025-02-0{i}")))
            .collect();

        let plan = plan_fixtures(&[5, 6], &jornadas, &LeagueSettings::default());

        assert_eq!(plan.len(), 2);
        assert_eq!((plan[0].home_team_id, plan[0].away_team_id), (5, 6));
        assert_eq!((plan[1].home_team_id, plan[1].away_team_id), (6, 5));
    }

    #[tokio::test]
    async fn test_generate_needs_teams_and_jornadas() {
        let db = test_support::database().await;
        test_support::seed_teams(&db, &["Solo"]).await;
        test_support::seed_jornadas(&db, &["2025-01-10"]).await;

        let err = generate_fixtures(db.pool(), &LeagueSettings::default(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_generate_and_regenerate_with_reset() {
        let db = test_support::database().await;
        test_support::seed_teams(&db, &["A", "B", "C", "D", "E"]).await;
        test_support::seed_jornadas(&db, &["2025-01-10", "2025-01-17", "2025-01-24"]).await;
        let settings = LeagueSettings::default();

        let first = generate_fixtures(db.pool(), &settings, false).await.unwrap();
        assert_eq!(first.rounds, 5);
        assert_eq!(first.jornadas, 3);
        assert_eq!(first.matches_created, 6);

        let again = generate_fixtures(db.pool(), &settings, true).await.unwrap();
        assert_eq!(again.matches_created, 6);
        assert_eq!(MatchRepository::new(db.pool()).count().await.unwrap(), 6);

        generate_fixtures(db.pool(), &settings, false).await.unwrap();
        assert_eq!(MatchRepository::new(db.pool()).count().await.unwrap(), 12);
    }
}
