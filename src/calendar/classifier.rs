use chrono::Weekday;

use crate::model::attendance::{DayRecord, RawStatus};
use crate::model::calendar::DayStatus;

/// Final display status for one day.
///
/// A missing record counts as `Absent`. A site-visit leave type turns `Leave`
/// or `Absent` into `Site Visit`, and that wins over the Sunday rule, which
/// turns a remaining `Absent` or `Missed Punch` into `Weekend`. Everything
/// else is shown as the service labelled it.
///
/// The site-visit override only applies to `Leave` and `Absent`; a `Present`
/// day tagged as a site visit stays `Present`.
pub fn classify(record: Option<&DayRecord>, weekday: Weekday) -> DayStatus {
    let baseline = record.map_or(RawStatus::Absent, |r| r.status);

    if matches!(baseline, RawStatus::Leave | RawStatus::Absent)
        && record.is_some_and(DayRecord::is_site_visit)
    {
        return DayStatus::SiteVisit;
    }

    if matches!(baseline, RawStatus::Absent | RawStatus::MissedPunch) && weekday == Weekday::Sun {
        return DayStatus::Weekend;
    }

    baseline.into()
}
