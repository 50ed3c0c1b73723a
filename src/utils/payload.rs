use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{AttendanceError, Result};
use crate::model::attendance::{DayRecord, MonthAttendance};

/// ===============================
/// Field helpers
/// ===============================
fn required<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    match obj.get(key) {
        Some(Value::Null) | None => Err(AttendanceError::MalformedPayload(format!(
            "missing field `{}`",
            key
        ))),
        Some(value) => Ok(value),
    }
}

fn as_employee_id(value: &Value) -> Result<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(AttendanceError::MalformedPayload(
            "`employeeId` must be a non-empty string or a number".to_string(),
        )),
    }
}

fn as_integer(value: &Value, key: &str) -> Result<i64> {
    value.as_i64().ok_or_else(|| {
        AttendanceError::MalformedPayload(format!("`{}` must be an integer", key))
    })
}

/// Null or absent totals count as zero.
fn as_hours(obj: &Map<String, Value>, key: &str) -> Result<f64> {
    match obj.get(key) {
        Some(Value::Null) | None => Ok(0.0),
        Some(value) => value.as_f64().ok_or_else(|| {
            AttendanceError::MalformedPayload(format!("`{}` must be a number", key))
        }),
    }
}

/// ===============================
/// Day entries
/// ===============================
fn decode_record(employee_id: &str, index: usize, entry: &Value) -> Option<DayRecord> {
    match serde_json::from_value::<DayRecord>(entry.clone()) {
        Ok(record) if record.day.is_some_and(|day| day >= 1) => Some(record),
        Ok(_) => {
            warn!(employee_id, index, "Skipping attendance entry without a usable day");
            None
        }
        Err(e) => {
            warn!(employee_id, index, error = %e, "Skipping malformed attendance entry");
            None
        }
    }
}

// ===============================
// Month payloads
// ===============================

/// Decodes one employee's month from the attendance service.
///
/// `employeeId`, `month` and `year` are required. Every entry of `records`
/// is decoded on its own and dropped when unusable, so one bad day never
/// costs the whole month.
pub fn decode_month(payload: &Value) -> Result<MonthAttendance> {
    let obj = payload.as_object().ok_or_else(|| {
        AttendanceError::MalformedPayload("attendance payload must be a JSON object".to_string())
    })?;

    let employee_id = as_employee_id(required(obj, "employeeId")?)?;

    let month = as_integer(required(obj, "month")?, "month")?;
    let month = u32::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| {
            AttendanceError::MalformedPayload(format!("month {} is outside 1..=12", month))
        })?;

    let year = as_integer(required(obj, "year")?, "year")?;
    let year = i32::try_from(year)
        .map_err(|_| AttendanceError::MalformedPayload(format!("year {} is out of range", year)))?;

    let employee_name = obj
        .get("employeeName")
        .and_then(Value::as_str)
        .map(str::to_string);

    let records = match obj.get("records") {
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| decode_record(&employee_id, index, entry))
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(_) => {
            return Err(AttendanceError::MalformedPayload(
                "`records` must be an array".to_string(),
            ));
        }
    };

    let attendance = MonthAttendance {
        employee_id,
        employee_name,
        month,
        year,
        records,
        total_monthly_hours: as_hours(obj, "totalMonthlyHours")?,
        total_monthly_overtime: as_hours(obj, "totalMonthlyOvertime")?,
    };

    debug!(
        employee_id = %attendance.employee_id,
        records = attendance.records.len(),
        "Decoded attendance month"
    );

    Ok(attendance)
}

/// Decodes a bulk fetch: an array of months, or a single month object.
///
/// Elements that cannot be decoded are skipped; the order of the rest is kept.
pub fn decode_bulk(payload: &Value) -> Result<Vec<MonthAttendance>> {
    match payload {
        Value::Array(items) => Ok(items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match decode_month(item) {
                Ok(attendance) => Some(attendance),
                Err(e) => {
                    warn!(index, error = %e, "Skipping employee attendance");
                    None
                }
            })
            .collect()),
        Value::Object(_) => Ok(vec![decode_month(payload)?]),
        _ => Err(AttendanceError::MalformedPayload(
            "bulk attendance payload must be an array or an object".to_string(),
        )),
    }
}

/// Parses JSON text and decodes it as a bulk fetch.
pub fn decode_str(text: &str) -> Result<Vec<MonthAttendance>> {
    let payload: Value = serde_json::from_str(text)
        .map_err(|e| AttendanceError::MalformedPayload(format!("invalid JSON: {}", e)))?;
    decode_bulk(&payload)
}
