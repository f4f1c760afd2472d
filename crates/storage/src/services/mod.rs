pub mod calendar;
pub mod fixtures;
pub mod results;
pub mod round_robin;
pub mod standings;
