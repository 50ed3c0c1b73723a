pub mod attendance;
pub mod calendar;
