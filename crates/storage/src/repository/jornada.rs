use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::Jornada;

pub struct JornadaRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> JornadaRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Jornada>> {
        let jornadas =
            sqlx::query_as::<_, Jornada>("SELECT id, number, date FROM jornadas ORDER BY number")
                .fetch_all(self.pool)
                .await?;

        Ok(jornadas)
    }

    /// Drop the whole calendar (and with it every match) and create jornadas
    /// numbered from 1 on the given dates.
    pub async fn replace_all(&self, dates: &[NaiveDate]) -> Result<Vec<Jornada>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM jornadas").execute(&mut *tx).await?;

        let mut jornadas = Vec::with_capacity(dates.len());
        for (idx, date) in dates.iter().enumerate() {
            let jornada = sqlx::query_as::<_, Jornada>(
                "INSERT INTO jornadas (number, date) VALUES (?, ?) RETURNING id, number, date",
            )
            .bind(idx as i64 + 1)
            .bind(date)
            .fetch_one(&mut *tx)
            .await?;
            jornadas.push(jornada);
        }

        tx.commit().await?;

        Ok(jornadas)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jornadas")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
