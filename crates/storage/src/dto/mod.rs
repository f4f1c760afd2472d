pub mod auth;
pub mod dashboard;
pub mod jornada;
pub mod matches;
pub mod standings;
pub mod team;
