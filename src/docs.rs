use crate::calendar::summary::{MonthReport, MonthSummary};
use crate::model::attendance::{DayRecord, MonthAttendance, RawStatus};
use crate::model::calendar::{CalendarCell, CellDetails, DayStatus, PlaceholderDetails};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Attendance Calendar",
        version = "1.0.0",
        description = r#"
## Attendance calendar shapes

Data shapes exchanged between the attendance service and the attendance views.

### Input
- **MonthAttendance** as returned by `GET /attendance/view?month=MM&year=YYYY`
  (a single object, or an array of them for the bulk query)

### Output
- **CalendarCell** grid, 7 columns, Sunday first, padded at both ends
- **MonthSummary** per employee and **MonthReport** with net working days

### Day status
`Present`, `Absent`, `Missed Punch`, `Leave`, `Holiday`, `Weekend`, `Site Visit`, `Padding`
"#,
    ),
    components(
        schemas(
            RawStatus,
            DayRecord,
            MonthAttendance,
            DayStatus,
            PlaceholderDetails,
            CellDetails,
            CalendarCell,
            MonthSummary,
            MonthReport
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_components() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components are declared");

        for name in ["DayRecord", "MonthAttendance", "CalendarCell", "DayStatus", "MonthReport"] {
            assert!(components.schemas.contains_key(name), "{name} is missing");
        }
    }
}
