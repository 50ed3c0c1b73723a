use std::collections::HashMap;

use chrono::{Datelike, Duration};
use tracing::{debug, instrument, warn};

use crate::calendar::classifier::classify;
use crate::error::{AttendanceError, Result};
use crate::model::attendance::DayRecord;
use crate::model::calendar::{CalendarCell, CellDetails};
use crate::utils::date_utils::{days_in_month, first_of_month, weekday_index};

pub const DAYS_PER_WEEK: usize = 7;

/// Builds the padded month grid for `month0` (0 = January).
///
/// Day 1 sits under its weekday column with Sunday first, and the last row
/// is filled up with padding so the grid length is a multiple of 7.
/// Records without a day, or with a day the month does not have, are skipped.
/// When a day appears twice the later record wins.
#[instrument(skip(records), fields(record_count = records.len()))]
pub fn build_calendar(year: i32, month0: u32, records: &[DayRecord]) -> Result<Vec<CalendarCell>> {
    if month0 > 11 {
        return Err(AttendanceError::InvalidArgument(format!(
            "month {} is outside 0..=11",
            month0
        )));
    }

    let month = month0 + 1;
    let first = first_of_month(year, month)?;
    let last_day = days_in_month(year, month)?;

    let mut by_day: HashMap<u32, &DayRecord> = HashMap::with_capacity(records.len());
    for record in records {
        match record.day {
            Some(day) if (1..=last_day).contains(&day) => {
                by_day.insert(day, record);
            }
            Some(day) => {
                warn!(day, year, month, "Skipping record for a day outside the month");
            }
            None => {
                warn!(status = %record.status, "Skipping record without a day");
            }
        }
    }

    let leading = weekday_index(first.weekday()) as usize;
    let mut cells = Vec::with_capacity(
        (leading + last_day as usize).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK,
    );
    cells.extend(std::iter::repeat_with(CalendarCell::padding).take(leading));

    for day in 1..=last_day {
        let date = first + Duration::days(i64::from(day - 1));
        let record = by_day.get(&day).copied();

        cells.push(CalendarCell {
            day: Some(day),
            status: classify(record, date.weekday()),
            details: Some(match record {
                Some(record) => CellDetails::Record(record.clone()),
                None => CellDetails::placeholder(),
            }),
        });
    }

    while cells.len() % DAYS_PER_WEEK != 0 {
        cells.push(CalendarCell::padding());
    }

    debug!(cells = cells.len(), leading, last_day, "Calendar built");

    Ok(cells)
}
