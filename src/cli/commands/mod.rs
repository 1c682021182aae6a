pub mod attendance;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod init;
pub mod log;
pub mod recap;
pub mod records;
pub mod school;
pub mod session;
pub mod staff;
pub mod students;
pub mod sync;
pub mod users;

use crate::core::crud::paginate;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::date::{require_date, today};
use crate::utils::formatting::page_footer;
use crate::utils::table::Table;
use chrono::NaiveDate;
use std::io::{self, Write};

/// Ask before deleting; `yes` skips the question.
///
/// Anything but `y`/`yes` (including a closed stdin) cancels.
pub(crate) fn confirm_delete(what: &str, yes: bool) -> AppResult<bool> {
    if yes {
        return Ok(true);
    }

    warning(format!("Delete {what}? This cannot be undone."));
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        Ok(true)
    } else {
        info("Deletion cancelled.");
        Ok(false)
    }
}

/// Render one page of `items` as a table.
pub(crate) fn print_page<T, F>(
    title: &str,
    items: &[T],
    page: usize,
    per_page: usize,
    headers: &[&str],
    to_row: F,
) where
    F: Fn(&T) -> Vec<String>,
{
    header(title);

    if items.is_empty() {
        info("No data.");
        return;
    }

    let page = paginate(items, page, per_page);
    let mut table = Table::new(headers);
    for item in page.items {
        table.add_row(to_row(item));
    }

    print!("{}", table.render());
    println!(
        "\n{}",
        page_footer(page.page, page.total_pages, page.total_items)
    );
}

/// Optional `YYYY-MM-DD` argument, today when absent.
pub(crate) fn date_or_today(arg: &Option<String>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => require_date(s),
        None => Ok(today()),
    }
}

/// Apply an optional override to a field.
pub(crate) fn set_if<T: Clone>(field: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *field = v.clone();
    }
}
