use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::model::attendance::MonthAttendance;
use crate::utils::date_utils::{days_in_month, first_of_month, is_sunday};

/// Non-Sunday holidays of the month, as flagged in the first employee's record.
///
/// Holidays are organisation wide, so the first record of a bulk fetch is
/// taken as representative; other employees are not consulted.
pub fn holiday_days(year: i32, month: u32, bulk: &[MonthAttendance]) -> Result<BTreeSet<u32>> {
    first_of_month(year, month)?;

    let Some(first_employee) = bulk.first() else {
        return Ok(BTreeSet::new());
    };

    let holidays = first_employee
        .records
        .iter()
        .filter(|record| record.is_holiday())
        .filter_map(|record| record.day)
        .filter(|&day| {
            NaiveDate::from_ymd_opt(year, month, day).is_some_and(|date| !is_sunday(date))
        })
        .collect();

    Ok(holidays)
}

/// Days in the 1-indexed `month` minus its Sundays and non-Sunday holidays.
///
/// Not clamped at zero.
pub fn net_working_days(year: i32, month: u32, bulk: &[MonthAttendance]) -> Result<i64> {
    let last_day = days_in_month(year, month)?;

    let sundays = (1..=last_day)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| is_sunday(*date))
        .count() as i64;

    let holidays = holiday_days(year, month, bulk)?;

    let net = i64::from(last_day) - sundays - holidays.len() as i64;
    debug!(year, month, last_day, sundays, holidays = holidays.len(), net, "Net working days");

    Ok(net)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttendanceError;
    use crate::model::attendance::{DayRecord, RawStatus};

    fn holidays_on(days: &[u32]) -> MonthAttendance {
        MonthAttendance::new("EMP-001", 2024, 9).with_records(
            days.iter()
                .map(|&day| DayRecord::new(day, RawStatus::Holiday))
                .collect(),
        )
    }

    #[test]
    fn test_thirty_day_month_with_holidays() {
        // September 2024 has 30 days and Sundays on 1, 8, 15, 22, 29
        assert_eq!(net_working_days(2024, 9, &[]).unwrap(), 25);

        // April 2024 has 30 days and four Sundays (7, 14, 21, 28)
        let april = MonthAttendance::new("EMP-001", 2024, 4).with_records(vec![
            DayRecord::new(10, RawStatus::Holiday),
            DayRecord::new(11, RawStatus::Holiday),
            DayRecord::new(12, RawStatus::Present),
        ]);
        assert_eq!(net_working_days(2024, 4, &[april]).unwrap(), 30 - 4 - 2);
    }

    #[test]
    fn test_sunday_holiday_not_subtracted_twice() {
        let bulk = vec![holidays_on(&[8, 16])];
        assert_eq!(
            holiday_days(2024, 9, &bulk).unwrap().into_iter().collect::<Vec<_>>(),
            vec![16]
        );
        assert_eq!(net_working_days(2024, 9, &bulk).unwrap(), 30 - 5 - 1);
    }

    #[test]
    fn test_only_first_employee_counts() {
        let bulk = vec![holidays_on(&[]), holidays_on(&[16, 17])];
        assert_eq!(net_working_days(2024, 9, &bulk).unwrap(), 25);

        let bulk = vec![holidays_on(&[16, 17]), holidays_on(&[])];
        assert_eq!(net_working_days(2024, 9, &bulk).unwrap(), 23);
    }

    #[test]
    fn test_duplicate_and_invalid_holiday_days() {
        let mut first = holidays_on(&[16, 16, 31, 0]);
        let mut undated = DayRecord::new(1, RawStatus::Holiday);
        undated.day = None;
        first.records.push(undated);

        assert_eq!(holiday_days(2024, 9, &[first]).unwrap().len(), 1);
    }

    #[test]
    fn test_leap_february() {
        // February 2024: 29 days, Sundays on 4, 11, 18, 25
        assert_eq!(net_working_days(2024, 2, &[]).unwrap(), 25);
        // February 2023: 28 days, Sundays on 5, 12, 19, 26
        assert_eq!(net_working_days(2023, 2, &[]).unwrap(), 24);
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            net_working_days(2024, 0, &[]),
            Err(AttendanceError::InvalidArgument(_))
        ));
        assert!(matches!(
            net_working_days(2024, 13, &[]),
            Err(AttendanceError::InvalidArgument(_))
        ));
    }
}
