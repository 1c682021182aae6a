// src/export/excel_date.rs

use chrono::{Duration, NaiveDate};

/// Day zero of the spreadsheet date system (1900 system, Lotus leap-year
/// bug included).
fn excel_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Convert a spreadsheet serial number to a calendar date; the fractional
/// (time) part is ignored.
pub(crate) fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    excel_epoch()?.checked_add_signed(Duration::try_days(serial.trunc() as i64)?)
}

