use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use crate::calendar::format::format_long;
use crate::calendar::grid::build_calendar;
use crate::calendar::working_days::net_working_days;
use crate::error::{AttendanceError, Result};
use crate::model::attendance::MonthAttendance;
use crate::model::calendar::{CalendarCell, DayStatus};

/// One employee's month at a glance, as the admin attendance summary lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "John Doe", nullable = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[schema(example = 2024)]
    pub year: i32,
    /// 1-indexed month
    #[schema(example = 9)]
    pub month: u32,

    pub present_days: u32,
    pub absent_days: u32,
    pub missed_punch_days: u32,
    pub leave_days: u32,
    pub site_visit_days: u32,
    pub holiday_days: u32,
    pub weekend_days: u32,

    /// Passed through from the service
    #[schema(example = 168.5)]
    pub total_monthly_hours: f64,
    #[schema(example = 4.25)]
    pub total_monthly_overtime: f64,
    #[schema(example = "168h 30min")]
    pub total_hours_display: String,
    #[schema(example = "4h 15min")]
    pub overtime_display: String,
}

impl MonthSummary {
    /// Counts the statuses of a built grid. Padding cells are ignored.
    pub fn from_cells(
        attendance: &MonthAttendance,
        year: i32,
        month: u32,
        cells: &[CalendarCell],
    ) -> Self {
        let mut summary = Self {
            employee_id: attendance.employee_id.clone(),
            employee_name: attendance.employee_name.clone(),
            year,
            month,
            present_days: 0,
            absent_days: 0,
            missed_punch_days: 0,
            leave_days: 0,
            site_visit_days: 0,
            holiday_days: 0,
            weekend_days: 0,
            total_monthly_hours: attendance.total_monthly_hours,
            total_monthly_overtime: attendance.total_monthly_overtime,
            total_hours_display: format_long(Some(attendance.total_monthly_hours)),
            overtime_display: format_long(Some(attendance.total_monthly_overtime)),
        };

        for cell in cells {
            let counter = match cell.status {
                DayStatus::Present => &mut summary.present_days,
                DayStatus::Absent => &mut summary.absent_days,
                DayStatus::MissedPunch => &mut summary.missed_punch_days,
                DayStatus::Leave => &mut summary.leave_days,
                DayStatus::SiteVisit => &mut summary.site_visit_days,
                DayStatus::Holiday => &mut summary.holiday_days,
                DayStatus::Weekend => &mut summary.weekend_days,
                DayStatus::Padding => continue,
            };
            *counter += 1;
        }

        summary
    }

    pub fn counted_days(&self) -> u32 {
        self.present_days
            + self.absent_days
            + self.missed_punch_days
            + self.leave_days
            + self.site_visit_days
            + self.holiday_days
            + self.weekend_days
    }
}

/// Grid and summary for one employee's month (`month0` is 0-indexed).
pub fn summarize(
    year: i32,
    month0: u32,
    attendance: &MonthAttendance,
) -> Result<(Vec<CalendarCell>, MonthSummary)> {
    let cells = build_calendar(year, month0, &attendance.records)?;
    let summary = MonthSummary::from_cells(attendance, year, month0 + 1, &cells);
    Ok((cells, summary))
}

/// Organisation-wide view of one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthReport {
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 9)]
    pub month: u32,
    #[schema(example = 24)]
    pub net_working_days: i64,
    pub employees: Vec<MonthSummary>,
}

/// Summarises every employee of a bulk fetch for the 1-indexed `month`.
#[instrument(skip(bulk), fields(employees = bulk.len()))]
pub fn build_report(year: i32, month: u32, bulk: &[MonthAttendance]) -> Result<MonthReport> {
    let month0 = month.checked_sub(1).ok_or_else(|| {
        AttendanceError::InvalidArgument(format!("month {} is outside 1..=12", month))
    })?;

    let net_working_days = net_working_days(year, month, bulk)?;

    let mut employees = Vec::with_capacity(bulk.len());
    for attendance in bulk {
        if attendance.year != year || attendance.month != month {
            warn!(
                employee_id = %attendance.employee_id,
                record_year = attendance.year,
                record_month = attendance.month,
                "Attendance record belongs to another month, summarising it for the requested one"
            );
        }

        let (_, summary) = summarize(year, month0, attendance)?;
        employees.push(summary);
    }

    info!(net_working_days, employees = employees.len(), "Month report built");

    Ok(MonthReport {
        year,
        month,
        net_working_days,
        employees,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::{DayRecord, RawStatus};

    fn september() -> MonthAttendance {
        let mut attendance = MonthAttendance::new("EMP-007", 2024, 9).with_records(vec![
            DayRecord::new(2, RawStatus::Present).with_punches("09:00", "17:30", 8.5),
            DayRecord::new(3, RawStatus::Present).with_punches("09:00", "18:45", 9.75),
            DayRecord::new(4, RawStatus::MissedPunch),
            DayRecord::new(5, RawStatus::Leave).with_leave_type("Sick"),
            DayRecord::new(6, RawStatus::Leave).with_leave_type("Site Visit"),
            DayRecord::new(8, RawStatus::Present).with_punches("10:00", "12:00", 2.0),
            DayRecord::new(16, RawStatus::Holiday).with_holiday_name("Eid"),
        ]);
        attendance.employee_name = Some("Jane Roe".to_string());
        attendance.total_monthly_hours = 20.25;
        attendance.total_monthly_overtime = 1.75;
        attendance
    }

    #[test]
    fn test_summary_counts() {
        let (cells, summary) = summarize(2024, 8, &september()).unwrap();

        assert_eq!(cells.len(), 35);
        assert_eq!(summary.month, 9);
        assert_eq!(summary.employee_name.as_deref(), Some("Jane Roe"));
        assert_eq!(summary.present_days, 3);
        assert_eq!(summary.missed_punch_days, 1);
        assert_eq!(summary.leave_days, 1);
        assert_eq!(summary.site_visit_days, 1);
        assert_eq!(summary.holiday_days, 1);
        // Sundays 1, 15, 22, 29; the 8th was worked
        assert_eq!(summary.weekend_days, 4);
        assert_eq!(summary.absent_days, 30 - 3 - 1 - 1 - 1 - 1 - 4);
        assert_eq!(summary.counted_days(), 30);
    }

    #[test]
    fn test_summary_totals_pass_through() {
        let (_, summary) = summarize(2024, 8, &september()).unwrap();
        assert_eq!(summary.total_monthly_hours, 20.25);
        assert_eq!(summary.total_hours_display, "20h 15min");
        assert_eq!(summary.overtime_display, "1h 45min");

        let empty = MonthAttendance::new("EMP-008", 2024, 9);
        let (_, summary) = summarize(2024, 8, &empty).unwrap();
        assert_eq!(summary.total_hours_display, "0h 00min");
        assert_eq!(summary.weekend_days, 5);
        assert_eq!(summary.absent_days, 25);
    }

    #[test]
    fn test_build_report() {
        let other = MonthAttendance::new("EMP-008", 2024, 9);
        let report = build_report(2024, 9, &[september(), other]).unwrap();

        // 30 days - 5 Sundays - holiday on the 16th
        assert_eq!(report.net_working_days, 24);
        assert_eq!(report.employees.len(), 2);
        assert_eq!(report.employees[0].employee_id, "EMP-007");
        assert_eq!(report.employees[1].holiday_days, 0);
    }

    #[test]
    fn test_build_report_invalid_month() {
        assert!(matches!(
            build_report(2024, 0, &[]),
            Err(AttendanceError::InvalidArgument(_))
        ));
        assert!(matches!(
            build_report(2024, 13, &[]),
            Err(AttendanceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(2024, 9, &[MonthAttendance::new("EMP-1", 2024, 9)]).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["netWorkingDays"], 25);
        assert_eq!(value["employees"][0]["employeeId"], "EMP-1");
        assert_eq!(value["employees"][0]["absentDays"], 25);
        assert!(value["employees"][0].get("employeeName").is_none());
    }
}
