pub mod calendar;
pub mod chore;
pub mod dashboard;
pub mod date;
pub mod theme;
pub mod weather;
