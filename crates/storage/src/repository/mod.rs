pub mod jornada;
pub mod matches;
pub mod team;
