//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDate;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `-` for a missing or blank value.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

pub fn date_or_dash(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Two decimals, as in the exported recaps.
pub fn percent(value: f64) -> String {
    format!("{value:.2}")
}

/// "Page 2/5 (87 items)"
pub fn page_footer(page: usize, total_pages: usize, total_items: usize) -> String {
    format!("Page {page}/{total_pages} ({total_items} items)")
}
