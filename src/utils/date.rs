use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Like `parse_date`, failing with `InvalidDate`.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start && d <= self.end
    }

    /// Monday to Friday days inside the range; 0 when `start > end`.
    pub fn weekdays(&self) -> u32 {
        let mut count = 0;
        let mut d = self.start;
        while d <= self.end {
            if !matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
                count += 1;
            }
            d += Duration::days(1);
        }
        count
    }

    /// Week containing `day`, starting on Monday and spanning `days` days.
    pub fn week_of(day: NaiveDate, days: i64) -> Self {
        let monday = day - Duration::days(day.weekday().num_days_from_monday() as i64);
        Self::new(monday, monday + Duration::days(days - 1))
    }

    /// Whole calendar month containing `day`.
    pub fn month_of(day: NaiveDate) -> Self {
        let first = day.with_day(1).unwrap_or(day);
        let last = month_last_day(first.year(), first.month())
            .and_then(|d| first.with_day(d))
            .unwrap_or(first);
        Self::new(first, last)
    }
}

/// Parse a period expression.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    let invalid = || AppError::InvalidDate(format!("unsupported range '{r}'"));

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(
                "start and end must have same format".to_string(),
            ));
        }

        let first = parse_period(start).ok_or_else(invalid)?;
        let last = parse_period(end).ok_or_else(invalid)?;
        Ok(DateRange::new(first.start, last.end))
    } else {
        parse_period(r.trim()).ok_or_else(invalid)
    }
}

/// One period: a whole year, a whole month or a single day.
fn parse_period(p: &str) -> Option<DateRange> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some(DateRange::new(
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            Some(DateRange::month_of(first))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some(DateRange::new(d, d))
        }
        _ => None,
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
