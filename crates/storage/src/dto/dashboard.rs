use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{matches::MatchDetail, standings::StandingRow, team::TeamResponse};

/// Public landing data: the table plus what is coming and what just happened.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OverviewResponse {
    pub standings: Vec<StandingRow>,
    pub upcoming: Vec<MatchDetail>,
    pub recent: Vec<MatchDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamDashboardResponse {
    pub team: TeamResponse,
    pub upcoming: Vec<MatchDetail>,
    /// Scheduled matches whose jornada date has already arrived.
    pub pending: Vec<MatchDetail>,
    pub recent: Vec<MatchDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminSummaryResponse {
    pub team_count: i64,
    pub jornada_count: i64,
    pub match_count: i64,
}
