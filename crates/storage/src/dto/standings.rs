use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::TeamId;

/// One line of the league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StandingRow {
    pub pos: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub no_shows: u32,
    pub gf: i64,
    pub ga: i64,
    pub gd: i64,
    pub points: i64,
}
