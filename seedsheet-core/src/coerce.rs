//! Defensive conversion of cell values into primitive seed fields.
//!
//! None of these functions fail: anything that cannot be read as the
//! requested type yields the caller's default.

use crate::reader::CellValue;
use crate::reader::table::format_number;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

/// Read a cell as a float
pub fn safe_float(cell: &CellValue, default: f64) -> f64 {
    let value = match cell {
        CellValue::Number(n) => *n,
        CellValue::Boolean(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        CellValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) => n,
            Err(_) => return default,
        },
        CellValue::Empty | CellValue::DateTime(_) | CellValue::Error(_) => return default,
    };

    if value.is_finite() { value } else { default }
}

/// Read a cell as an integer, truncating any fraction toward zero
pub fn safe_int(cell: &CellValue, default: i64) -> i64 {
    let value = safe_float(cell, f64::NAN);
    if !value.is_finite() {
        return default;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return default;
    }
    truncated as i64
}

/// Text values spreadsheet exports use for a missing value. Matched
/// against the raw cell text, before trimming.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw text cell stands for a missing value
pub fn is_missing_marker(text: &str) -> bool {
    MISSING_MARKERS.contains(&text)
}

/// Read a cell as trimmed text.
///
/// Missing-value markers (see [`MISSING_MARKERS`]) read as `default`, in
/// text cells and error cells alike; other error cells keep their Excel
/// text such as `#DIV/0!`.
pub fn safe_str(cell: &CellValue, default: &str) -> String {
    match cell {
        CellValue::Empty => default.to_string(),
        CellValue::Text(s) | CellValue::Error(s) if is_missing_marker(s) => default.to_string(),
        CellValue::Text(s) | CellValue::Error(s) => s.trim().to_string(),
        CellValue::Number(n) => format_number(*n),
        CellValue::Boolean(b) => format_bool(*b).to_string(),
        CellValue::DateTime(serial) => format_serial(*serial),
    }
}

/// Names that stand for "no value" in exported sheets.
///
/// `""` and `"nan"` always count; `extra` carries sheet-specific markers
/// such as `"(blank)"` from pivot exports.
pub fn is_placeholder_name(name: &str, extra: &[String]) -> bool {
    name.is_empty() || name == "nan" || extra.iter().any(|p| p == name)
}

pub(crate) fn format_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

/// Convert an Excel 1900-system serial into a date-time
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    // 2958465 is 9999-12-31, the last date Excel can display
    if !serial.is_finite() || !(0.0..2_958_466.0).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::milliseconds(millis))
}

/// Render a date serial as `YYYY-MM-DD`, adding the time only when present
pub(crate) fn format_serial(serial: f64) -> String {
    match excel_serial_to_datetime(serial) {
        Some(dt) if dt.num_seconds_from_midnight() == 0 => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_number(serial),
    }
}
