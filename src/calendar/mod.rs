pub mod classifier;
pub mod format;
pub mod grid;
pub mod summary;
pub mod working_days;

pub use classifier::classify;
pub use format::{format_long, format_short};
pub use grid::build_calendar;
pub use summary::{build_report, summarize, MonthReport, MonthSummary};
pub use working_days::{holiday_days, net_working_days};
