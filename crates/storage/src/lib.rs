use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod settings;

pub use settings::LeagueSettings;

use error::Result;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database lives as long as its connection, so the pool
        // must hold exactly one and never recycle it.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Database;
    use crate::repository::{jornada::JornadaRepository, team::TeamRepository};
    use crate::models::TeamId;
    use chrono::NaiveDate;

    pub async fn database() -> Database {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.run_migrations().await.unwrap();
        db
    }

    pub async fn seed_teams(db: &Database, names: &[&str]) -> Vec<TeamId> {
        let repo = TeamRepository::new(db.pool());
        let mut ids = Vec::new();
        for name in names {
            let team = repo
                .create(name, &name.to_lowercase(), "not-a-real-hash")
                .await
                .unwrap();
            ids.push(team.id);
        }
        ids
    }

    pub async fn seed_jornadas(db: &Database, dates: &[&str]) {
        let dates: Vec<NaiveDate> = dates.iter().map(|d| d.parse().unwrap()).collect();
        JornadaRepository::new(db.pool())
            .replace_all(&dates)
            .await
            .unwrap();
    }
}
