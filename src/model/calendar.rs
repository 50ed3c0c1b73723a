use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::model::attendance::{DayRecord, RawStatus};

/// Final status of a calendar cell, as presentation code renders it.
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
pub enum DayStatus {
    Present,
    Absent,
    #[serde(rename = "Missed Punch")]
    #[strum(serialize = "Missed Punch")]
    MissedPunch,
    Leave,
    Holiday,
    Weekend,
    #[serde(rename = "Site Visit")]
    #[strum(serialize = "Site Visit")]
    SiteVisit,
    Padding,
}

impl From<RawStatus> for DayStatus {
    fn from(status: RawStatus) -> Self {
        match status {
            RawStatus::Present => DayStatus::Present,
            RawStatus::Absent => DayStatus::Absent,
            RawStatus::MissedPunch => DayStatus::MissedPunch,
            RawStatus::Leave => DayStatus::Leave,
            RawStatus::Holiday => DayStatus::Holiday,
        }
    }
}

/// What a real day cell shows in its detail popover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CellDetails {
    /// The record the service sent for this day.
    Record(DayRecord),
    /// Zero values for a day with no record.
    Placeholder(PlaceholderDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderDetails {
    #[schema(example = "-")]
    pub in_time: String,
    #[schema(example = "-")]
    pub out_time: String,
    #[schema(example = 0.0)]
    pub total_hours: f64,
}

impl CellDetails {
    pub fn placeholder() -> Self {
        CellDetails::Placeholder(PlaceholderDetails {
            in_time: "-".to_string(),
            out_time: "-".to_string(),
            total_hours: 0.0,
        })
    }

    pub fn record(&self) -> Option<&DayRecord> {
        match self {
            CellDetails::Record(record) => Some(record),
            CellDetails::Placeholder(_) => None,
        }
    }
}

/// One position in the 7-column month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "day": 1,
    "status": "Weekend",
    "details": { "inTime": "-", "outTime": "-", "totalHours": 0.0 }
}))]
pub struct CalendarCell {
    /// Day of month, `None` for padding
    #[schema(example = 1, nullable = true)]
    pub day: Option<u32>,
    pub status: DayStatus,
    #[schema(nullable = true)]
    pub details: Option<CellDetails>,
}

impl CalendarCell {
    pub fn padding() -> Self {
        Self {
            day: None,
            status: DayStatus::Padding,
            details: None,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.status == DayStatus::Padding
    }
}
