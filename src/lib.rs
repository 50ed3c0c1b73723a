//! Attendance calendar engine for the HRM system.
//!
//! Turns the sparse monthly attendance the attendance service returns into a
//! padded 7-column calendar grid with a display status per day, and derives
//! the monthly figures the attendance views show. Every function is pure:
//! callers pass the year and month explicitly and nothing reads the clock.

pub mod calendar;
pub mod config;
pub mod docs;
pub mod error;
pub mod model;
pub mod utils;

pub use error::{AttendanceError, Result};
