use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{AttendanceError, Result};

/// First day of a 1-indexed month.
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(AttendanceError::InvalidArgument(format!(
            "month {} is outside 1..=12",
            month
        )));
    }

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        AttendanceError::InvalidArgument(format!("year {} is not representable", year))
    })
}

/// Number of days in a 1-indexed month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    first_of_month(year, month)?;

    if month == 12 {
        return Ok(31);
    }

    // Last day of the month is the day before the first of the next one.
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| {
            AttendanceError::InvalidArgument(format!("year {} is not representable", year))
        })
}

/// Weekday column with Sunday as 0 and Saturday as 6.
pub fn weekday_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}
