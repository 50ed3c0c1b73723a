//! Renders fractional hours (`8.5` is eight and a half hours) for display.
//!
//! Minutes are rounded, not carried: an input just below a whole hour such as
//! `1.999` renders as `01:60`. Callers comparing literal output rely on that.

/// Whole hours and rounded minutes, or `None` for a value that shows as empty.
fn split_hours(hours: Option<f64>) -> Option<(i64, i64)> {
    let hours = hours?;
    if hours == 0.0 || hours.is_nan() {
        return None;
    }

    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).round();
    Some((whole as i64, minutes as i64))
}

/// `HH:MM`, or `-` when there is nothing to show.
pub fn format_short(hours: Option<f64>) -> String {
    match split_hours(hours) {
        Some((h, m)) => format!("{:02}:{:02}", h, m),
        None => "-".to_string(),
    }
}

/// `Xh YYmin`, or `0h 00min` when there is nothing to show.
pub fn format_long(hours: Option<f64>) -> String {
    match split_hours(hours) {
        Some((h, m)) => format!("{}h {:02}min", h, m),
        None => "0h 00min".to_string(),
    }
}
