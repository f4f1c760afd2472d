use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::{Team, TeamId, TeamSummary};

const TEAM_COLUMNS: &str = "id, name, username, password_hash, is_active, created_at";

pub struct TeamRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all teams, active or not, by name
    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams ORDER BY name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: TeamId) -> Result<Team> {
        sqlx::query_as::<_, Team>(&format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(team)
    }

    /// Register a new, active team. Name and username must both be unused.
    pub async fn create(&self, name: &str, username: &str, password_hash: &str) -> Result<Team> {
        let result = sqlx::query_as::<_, Team>(&format!(
            r#"
            INSERT INTO teams (name, username, password_hash)
            VALUES (?, ?, ?)
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(username)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from);

        match result {
            Err(e) if e.is_unique_violation() => Err(StorageError::ConstraintViolation(
                "Team name or username already exists".to_string(),
            )),
            other => other,
        }
    }

    /// Flip the active flag and return the updated team
    pub async fn toggle_active(&self, id: TeamId) -> Result<Team> {
        sqlx::query_as::<_, Team>(&format!(
            "UPDATE teams SET is_active = NOT is_active WHERE id = ? RETURNING {TEAM_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn set_password_hash(&self, id: TeamId, password_hash: &str) -> Result<()> {
        let result = sqlx::query("UPDATE teams SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teams")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Active teams by name; the order the standings table falls back to on ties
    pub async fn list_active_summaries(&self) -> Result<Vec<TeamSummary>> {
        let teams = sqlx::query_as::<_, TeamSummary>(
            "SELECT id, name, is_active FROM teams WHERE is_active = 1 ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Active team ids in creation order, as fed to the fixture generator
    pub async fn list_active_ids(&self) -> Result<Vec<TeamId>> {
        let ids = sqlx::query_scalar::<_, TeamId>(
            "SELECT id FROM teams WHERE is_active = 1 ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }
}
