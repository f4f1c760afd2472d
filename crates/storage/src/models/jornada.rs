use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub type JornadaId = i64;

/// A match day. Jornadas are ordered by `number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Jornada {
    pub id: JornadaId,
    pub number: i64,
    pub date: NaiveDate,
}
