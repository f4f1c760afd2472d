use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::matches::MatchDetail;
use crate::error::{Result, StorageError};
use crate::models::{JornadaId, Match, MatchId, MatchStatus, TeamId};

const MATCH_COLUMNS: &str = "id, jornada_id, home_team_id, away_team_id, scheduled_at, status, \
     home_score, away_score, winner_one_player, no_show_team_id, submitted_by_team_id, updated_at";

const DETAIL_SELECT: &str = r#"
    SELECT m.id, m.jornada_id, j.number AS jornada_number, j.date AS date,
           m.home_team_id, th.name AS home_name,
           m.away_team_id, ta.name AS away_name,
           m.scheduled_at, m.status, m.home_score, m.away_score,
           m.winner_one_player, m.no_show_team_id, m.submitted_by_team_id, m.updated_at
    FROM matches m
    JOIN jornadas j ON j.id = m.jornada_id
    JOIN teams th ON th.id = m.home_team_id
    JOIN teams ta ON ta.id = m.away_team_id
    WHERE 1=1
"#;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchOrder {
    /// By jornada number, then creation
    #[default]
    Calendar,
    /// Earliest jornada date first
    Soonest,
    /// Latest jornada date first, most recently updated first within a day
    Latest,
}

/// Filter for joined match listings. Unset fields do not restrict.
#[derive(Debug, Clone, Default)]
pub struct MatchQuery {
    pub team_id: Option<TeamId>,
    pub jornada_id: Option<JornadaId>,
    pub status: Option<MatchStatus>,
    pub from_date: Option<NaiveDate>,
    pub until_date: Option<NaiveDate>,
    pub order: MatchOrder,
    pub limit: Option<i64>,
}

impl MatchQuery {
    /// Scheduled matches on or after `today`, soonest first.
    pub fn upcoming(today: NaiveDate, limit: i64) -> Self {
        Self {
            status: Some(MatchStatus::Scheduled),
            from_date: Some(today),
            order: MatchOrder::Soonest,
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Completed matches, latest first.
    pub fn recent(limit: i64) -> Self {
        Self {
            status: Some(MatchStatus::Completed),
            order: MatchOrder::Latest,
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn for_team(self, team_id: TeamId) -> Self {
        Self {
            team_id: Some(team_id),
            ..self
        }
    }

    fn push_filters(&self, query: &mut QueryBuilder<'_, Sqlite>) {
        if let Some(team_id) = self.team_id {
            query.push(" AND (m.home_team_id = ");
            query.push_bind(team_id);
            query.push(" OR m.away_team_id = ");
            query.push_bind(team_id);
            query.push(")");
        }

        if let Some(jornada_id) = self.jornada_id {
            query.push(" AND m.jornada_id = ");
            query.push_bind(jornada_id);
        }

        if let Some(status) = self.status {
            query.push(" AND m.status = ");
            query.push_bind(status);
        }

        if let Some(from_date) = self.from_date {
            query.push(" AND j.date >= ");
            query.push_bind(from_date);
        }

        if let Some(until_date) = self.until_date {
            query.push(" AND j.date <= ");
            query.push_bind(until_date);
        }

        query.push(match self.order {
            MatchOrder::Calendar => " ORDER BY j.number, m.id",
            MatchOrder::Soonest => " ORDER BY j.date ASC, m.id",
            MatchOrder::Latest => " ORDER BY j.date DESC, m.updated_at DESC, m.id DESC",
        });

        if let Some(limit) = self.limit {
            query.push(" LIMIT ");
            query.push_bind(limit);
        }
    }
}

/// Result fields as written to a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredResult {
    Scored {
        home_score: i64,
        away_score: i64,
        winner_one_player: bool,
    },
    NoShow {
        absent: TeamId,
    },
}

/// A match to be created by fixture generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFixture {
    pub jornada_id: JornadaId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub scheduled_at: String,
}

pub struct MatchRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Joined listing with team names and jornada date
    pub async fn list(&self, filter: &MatchQuery) -> Result<Vec<MatchDetail>> {
        let mut query = QueryBuilder::<Sqlite>::new(DETAIL_SELECT);
        filter.push_filters(&mut query);

        let rows = query.build_query_as::<MatchDetail>().fetch_all(self.pool).await?;

        Ok(rows)
    }

    pub async fn list_all(&self) -> Result<Vec<MatchDetail>> {
        self.list(&MatchQuery::default()).await
    }

    pub async fn list_by_jornada(&self, jornada_id: JornadaId) -> Result<Vec<MatchDetail>> {
        self.list(&MatchQuery {
            jornada_id: Some(jornada_id),
            ..MatchQuery::default()
        })
        .await
    }

    pub async fn find(&self, id: MatchId) -> Result<Match> {
        sqlx::query_as::<_, Match>(&format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn find_detail(&self, id: MatchId) -> Result<MatchDetail> {
        let mut query = QueryBuilder::<Sqlite>::new(DETAIL_SELECT);
        query.push(" AND m.id = ");
        query.push_bind(id);

        query
            .build_query_as::<MatchDetail>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Raw completed matches, the input of the standings table
    pub async fn list_completed(&self) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE status = 'completed' ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    /// Complete a match with `result`.
    ///
    /// A team submission (`submitted_by` set) only lands on a match that is
    /// still scheduled; the check happens in the UPDATE itself so two
    /// concurrent reports cannot both succeed.
    pub async fn record_result(
        &self,
        id: MatchId,
        result: &StoredResult,
        submitted_by: Option<TeamId>,
        updated_at: &str,
    ) -> Result<()> {
        let (home_score, away_score, winner_one_player, no_show_team_id) = match *result {
            StoredResult::Scored {
                home_score,
                away_score,
                winner_one_player,
            } => (Some(home_score), Some(away_score), winner_one_player, None),
            StoredResult::NoShow { absent } => (None, None, false, Some(absent)),
        };

        let mut query = QueryBuilder::<Sqlite>::new(
            "UPDATE matches SET status = 'completed', home_score = ",
        );
        query.push_bind(home_score);
        query.push(", away_score = ");
        query.push_bind(away_score);
        query.push(", winner_one_player = ");
        query.push_bind(winner_one_player);
        query.push(", no_show_team_id = ");
        query.push_bind(no_show_team_id);
        query.push(", submitted_by_team_id = ");
        query.push_bind(submitted_by);
        query.push(", updated_at = ");
        query.push_bind(updated_at);
        query.push(" WHERE id = ");
        query.push_bind(id);
        if submitted_by.is_some() {
            query.push(" AND status = 'scheduled'");
        }

        let outcome = query.build().execute(self.pool).await?;

        if outcome.rows_affected() == 0 {
            // Distinguish a missing match from one that was completed meanwhile.
            self.find(id).await?;
            return Err(StorageError::ConstraintViolation(
                "Match already has a result".to_string(),
            ));
        }

        Ok(())
    }

    /// Reopen a match, clearing every result field
    pub async fn reset(&self, id: MatchId) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE matches
            SET status = 'scheduled', home_score = NULL, away_score = NULL,
                winner_one_player = 0, no_show_team_id = NULL
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn delete(&self, id: MatchId) -> Result<()> {
        let result = sqlx::query("DELETE FROM matches WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM matches")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Insert scheduled fixtures in one transaction, optionally wiping every
    /// existing match first. Returns the number of matches created.
    pub async fn insert_fixtures(&self, wipe_existing: bool, fixtures: &[NewFixture]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        if wipe_existing {
            let wiped = sqlx::query("DELETE FROM matches").execute(&mut *tx).await?;
            tracing::info!(deleted = wiped.rows_affected(), "Cleared existing matches");
        }

        for fixture in fixtures {
            sqlx::query(
                r#"
                INSERT INTO matches (jornada_id, home_team_id, away_team_id, scheduled_at, status)
                VALUES (?, ?, ?, ?, 'scheduled')
                "#,
            )
            .bind(fixture.jornada_id)
            .bind(fixture.home_team_id)
            .bind(fixture.away_team_id)
            .bind(&fixture.scheduled_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(fixtures.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::jornada::JornadaRepository;
    use crate::test_support;

    struct Fixture {
        db: crate::Database,
        teams: Vec<TeamId>,
        jornadas: Vec<JornadaId>,
    }

    /// Three teams, two jornadas, one match per jornada.
    async fn setup() -> Fixture {
        let db = test_support::database().await;
        let teams = test_support::seed_teams(&db, &["Alpha", "Bravo", "Charlie"]).await;
        test_support::seed_jornadas(&db, &["2025-01-10", "2025-01-17"]).await;
        let jornadas: Vec<JornadaId> = JornadaRepository::new(db.pool())
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.id)
            .collect();

        MatchRepository::new(db.pool())
            .insert_fixtures(
                false,
                &[
                    NewFixture {
                        jornada_id: jornadas[0],
                        home_team_id: teams[0],
                        away_team_id: teams[1],
                        scheduled_at: "2025-01-10 22:30:00".to_string(),
                    },
                    NewFixture {
                        jornada_id: jornadas[1],
                        home_team_id: teams[2],
                        away_team_id: teams[0],
                        scheduled_at: "2025-01-17 22:30:00".to_string(),
                    },
                ],
            )
            .await
            .unwrap();

        Fixture {
            db,
            teams,
            jornadas,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_list_joins_names_and_dates() {
        let f = setup().await;
        let repo = MatchRepository::new(f.db.pool());

        let all = repo.list_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].home_name, "Alpha");
        assert_eq!(all[0].away_name, "Bravo");
        assert_eq!(all[0].jornada_number, 1);
        assert_eq!(all[1].date, date("2025-01-17"));
        assert_eq!(all[1].status, MatchStatus::Scheduled);

        let second = repo.list_by_jornada(f.jornadas[1]).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].home_team_id, f.teams[2]);
    }

    #[tokio::test]
    async fn test_upcoming_respects_date_and_team() {
        let f = setup().await;
        let repo = MatchRepository::new(f.db.pool());

        let upcoming = repo
            .list(&MatchQuery::upcoming(date("2025-01-11"), 10))
            .await
            .unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].jornada_id, f.jornadas[1]);

        let bravo = repo
            .list(&MatchQuery::upcoming(date("2025-01-01"), 10).for_team(f.teams[1]))
            .await
            .unwrap();
        assert_eq!(bravo.len(), 1);
        assert_eq!(bravo[0].away_team_id, f.teams[1]);
    }

    #[tokio::test]
    async fn test_record_and_reset_result() {
        let f = setup().await;
        let repo = MatchRepository::new(f.db.pool());
        let id = repo.list_all().await.unwrap()[0].id;

        repo.record_result(
            id,
            &StoredResult::Scored {
                home_score: 4,
                away_score: 2,
                winner_one_player: true,
            },
            Some(f.teams[0]),
            "2025-01-10T23:59:00+01:00",
        )
        .await
        .unwrap();

        let stored = repo.find(id).await.unwrap();
        assert!(stored.is_completed());
        assert_eq!((stored.home_score, stored.away_score), (Some(4), Some(2)));
        assert!(stored.winner_one_player);
        assert_eq!(stored.submitted_by_team_id, Some(f.teams[0]));
        assert_eq!(repo.list_completed().await.unwrap().len(), 1);
        assert_eq!(repo.list(&MatchQuery::recent(10)).await.unwrap()[0].id, id);

        repo.reset(id).await.unwrap();
        let reopened = repo.find(id).await.unwrap();
        assert_eq!(reopened.status, MatchStatus::Scheduled);
        assert_eq!((reopened.home_score, reopened.away_score), (None, None));
        assert!(!reopened.winner_one_player);
        assert_eq!(reopened.no_show_team_id, None);
    }

    #[tokio::test]
    async fn test_second_team_report_is_rejected() {
        let f = setup().await;
        let repo = MatchRepository::new(f.db.pool());
        let id = repo.list_all().await.unwrap()[0].id;
        let no_show = StoredResult::NoShow { absent: f.teams[1] };

        repo.record_result(id, &no_show, Some(f.teams[0]), "t1")
            .await
            .unwrap();
        let err = repo
            .record_result(id, &no_show, Some(f.teams[1]), "t2")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));

        // The administrator may overwrite.
        repo.record_result(
            id,
            &StoredResult::Scored {
                home_score: 1,
                away_score: 0,
                winner_one_player: false,
            },
            None,
            "t3",
        )
        .await
        .unwrap();
        let stored = repo.find(id).await.unwrap();
        assert_eq!(stored.no_show_team_id, None);
        assert_eq!(stored.home_score, Some(1));
    }

    #[tokio::test]
    async fn test_missing_match_is_not_found() {
        let f = setup().await;
        let repo = MatchRepository::new(f.db.pool());

        assert!(matches!(repo.find(999).await, Err(StorageError::NotFound)));
        assert!(matches!(repo.reset(999).await, Err(StorageError::NotFound)));
        assert!(matches!(repo.delete(999).await, Err(StorageError::NotFound)));
        assert!(matches!(
            repo.record_result(999, &StoredResult::NoShow { absent: 1 }, None, "t")
                .await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_replacing_jornadas_cascades_to_matches() {
        let f = setup().await;

        JornadaRepository::new(f.db.pool())
            .replace_all(&[date("2025-03-01")])
            .await
            .unwrap();

        assert_eq!(MatchRepository::new(f.db.pool()).count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_fixtures_can_wipe_existing() {
        let f = setup().await;
        let repo = MatchRepository::new(f.db.pool());

        let created = repo
            .insert_fixtures(
                true,
                &[NewFixture {
                    jornada_id: f.jornadas[0],
                    home_team_id: f.teams[1],
                    away_team_id: f.teams[2],
                    scheduled_at: "2025-01-10 22:30:00".to_string(),
                }],
            )
            .await
            .unwrap();

        assert_eq!(created, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
