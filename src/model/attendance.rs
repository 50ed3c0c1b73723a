use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Day status exactly as the attendance service labels it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
pub enum RawStatus {
    Present,
    Absent,
    #[serde(rename = "Missed Punch")]
    #[strum(serialize = "Missed Punch")]
    MissedPunch,
    Leave,
    Holiday,
}

/// One employee's attendance entry for a single day of the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "day": 14,
    "status": "Present",
    "inTime": "09:15",
    "outTime": "18:40",
    "totalHours": 9.42,
    "overtime": 1.42
}))]
pub struct DayRecord {
    /// Day of month (1..31). Entries without one are skipped.
    #[schema(example = 14, nullable = true)]
    #[serde(default)]
    pub day: Option<u32>,

    pub status: RawStatus,

    #[schema(example = "09:15", nullable = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_time: Option<String>,

    #[schema(example = "18:40", nullable = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_time: Option<String>,

    /// Fractional hours worked
    #[schema(example = 9.42, nullable = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,

    #[schema(example = 1.42, nullable = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime: Option<f64>,

    #[schema(example = "Site Visit", nullable = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,

    #[schema(example = "Independence Day", nullable = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
}

impl DayRecord {
    pub fn new(day: u32, status: RawStatus) -> Self {
        Self {
            day: Some(day),
            status,
            in_time: None,
            out_time: None,
            total_hours: None,
            overtime: None,
            leave_type: None,
            holiday_name: None,
        }
    }

    pub fn with_leave_type(mut self, leave_type: impl Into<String>) -> Self {
        self.leave_type = Some(leave_type.into());
        self
    }

    pub fn with_punches(
        mut self,
        in_time: impl Into<String>,
        out_time: impl Into<String>,
        total_hours: f64,
    ) -> Self {
        self.in_time = Some(in_time.into());
        self.out_time = Some(out_time.into());
        self.total_hours = Some(total_hours);
        self
    }

    pub fn with_holiday_name(mut self, name: impl Into<String>) -> Self {
        self.holiday_name = Some(name.into());
        self
    }

    pub fn is_holiday(&self) -> bool {
        self.status == RawStatus::Holiday
    }

    /// True when the leave type marks off-site work, ignoring case and whitespace.
    pub fn is_site_visit(&self) -> bool {
        self.leave_type.as_deref().is_some_and(|leave_type| {
            let normalized: String = leave_type
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect();
            normalized == "sitevisit"
        })
    }
}

/// One employee's month as returned by `GET /attendance/view`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "employeeId": "EMP-001",
    "employeeName": "John Doe",
    "month": 9,
    "year": 2024,
    "records": [
        { "day": 2, "status": "Present", "inTime": "09:00", "outTime": "17:30", "totalHours": 8.5 },
        { "day": 3, "status": "Leave", "leaveType": "Site Visit" }
    ],
    "totalMonthlyHours": 8.5,
    "totalMonthlyOvertime": 0.0
}))]
pub struct MonthAttendance {
    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "John Doe", nullable = true)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,

    /// 1-indexed month
    #[schema(example = 9)]
    pub month: u32,

    #[schema(example = 2024)]
    pub year: i32,

    #[serde(default)]
    pub records: Vec<DayRecord>,

    #[schema(example = 8.5)]
    #[serde(default)]
    pub total_monthly_hours: f64,

    #[schema(example = 0.0)]
    #[serde(default)]
    pub total_monthly_overtime: f64,
}

impl MonthAttendance {
    pub fn new(employee_id: impl Into<String>, year: i32, month: u32) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: None,
            month,
            year,
            records: Vec::new(),
            total_monthly_hours: 0.0,
            total_monthly_overtime: 0.0,
        }
    }

    pub fn with_records(mut self, records: Vec<DayRecord>) -> Self {
        self.records = records;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_raw_status_labels() {
        assert_eq!(RawStatus::MissedPunch.to_string(), "Missed Punch");
        assert_eq!(
            RawStatus::from_str("Missed Punch").unwrap(),
            RawStatus::MissedPunch
        );
        assert_eq!(RawStatus::Holiday.as_ref(), "Holiday");

        let parsed: RawStatus = serde_json::from_str("\"Missed Punch\"").unwrap();
        assert_eq!(parsed, RawStatus::MissedPunch);
        assert!(serde_json::from_str::<RawStatus>("\"Late\"").is_err());
    }

    #[test]
    fn test_site_visit_detection() {
        let record = DayRecord::new(3, RawStatus::Leave);
        assert!(!record.is_site_visit());

        for label in ["sitevisit", "Site Visit", " SITE VISIT ", "Site\tvisit", "SiteVisit"] {
            assert!(
                record.clone().with_leave_type(label).is_site_visit(),
                "{label:?} should count as a site visit"
            );
        }

        for label in ["Sick", "site-visit", "visit", ""] {
            assert!(!record.clone().with_leave_type(label).is_site_visit());
        }
    }

    #[test]
    fn test_day_record_camel_case() {
        let record: DayRecord = serde_json::from_value(serde_json::json!({
            "day": 5,
            "status": "Holiday",
            "holidayName": "Founders Day",
            "totalHours": null
        }))
        .unwrap();

        assert_eq!(record.day, Some(5));
        assert!(record.is_holiday());
        assert_eq!(record.holiday_name.as_deref(), Some("Founders Day"));
        assert_eq!(record.total_hours, None);
    }
}
