pub mod jornada;
pub mod matches;
pub mod team;

pub use jornada::{Jornada, JornadaId};
pub use matches::{Match, MatchId, MatchOutcome, MatchStatus};
pub use team::{Team, TeamId, TeamSummary};
