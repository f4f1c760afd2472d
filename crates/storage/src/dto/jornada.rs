use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::matches::MatchDetail;
use crate::models::Jornada;

/// Replaces the whole calendar. Entry `i` is the date of jornada `i + 1`;
/// a missing date falls back to today.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScheduleJornadasRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Between 1 and 100 jornadas can be scheduled"
    ))]
    pub dates: Vec<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleJornadasResponse {
    pub jornadas: Vec<Jornada>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JornadaWithMatches {
    pub jornada: Jornada,
    pub matches: Vec<MatchDetail>,
}
