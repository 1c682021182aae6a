use crate::cli::parser::{ExportArgs, RangeArgs, RecapAction};
use crate::core::context::AppContext;
use crate::core::crud;
use crate::core::recap;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic, RecapExport};
use crate::ui::messages::{header, info};
use crate::utils::date::{DateRange, parse_range, today};
use crate::utils::colors::{RESET, color_for_percentage};
use crate::utils::formatting::percent;
use crate::utils::table::Table;
use std::path::Path;

/// Days shown by `--this-week`.
const STUDENT_WEEK_DAYS: i64 = 7;
const TEACHER_WEEK_DAYS: i64 = 5;

fn resolve_range(args: &RangeArgs, week_days: i64) -> AppResult<DateRange> {
    if let Some(r) = &args.range {
        return parse_range(r);
    }
    if args.this_week {
        return Ok(DateRange::week_of(today(), week_days));
    }
    Ok(DateRange::month_of(today()))
}

/// Format from `--format`, else from the file extension, else CSV.
fn resolve_format(args: &ExportArgs) -> ExportFormat {
    match (args.format, args.file.as_deref()) {
        (Some(f), _) => f,
        (None, Some(file)) => ExportFormat::from_path(Path::new(file)),
        (None, None) => ExportFormat::Csv,
    }
}

fn export_if_requested(recap: &RecapExport, range: DateRange, args: &ExportArgs) -> AppResult<()> {
    if args.file.is_none() && args.format.is_none() {
        return Ok(());
    }
    ExportLogic::export(
        recap,
        range,
        resolve_format(args),
        args.file.as_deref(),
        args.force,
    )?;
    Ok(())
}

pub fn handle(action: &RecapAction, ctx: &mut AppContext) -> AppResult<()> {
    match action {
        RecapAction::Students {
            range,
            class,
            export,
        } => {
            let range = resolve_range(range, STUDENT_WEEK_DAYS)?;
            if let Some(c) = class {
                crud::require(&ctx.state.classes, *c)?;
            }
            let rows = recap::student_recap(&ctx.state, range, *class);

            header(format!("Student attendance {} to {}", range.start, range.end));
            if rows.is_empty() {
                info("No students.");
            } else {
                let result = RecapExport::Students(rows);
                let mut table = Table::new(result.headers());
                for row in result.table() {
                    table.add_row(row);
                }
                print!("{}", table.render());
                export_if_requested(&result, range, export)?;
            }
        }

        RecapAction::Teachers {
            range,
            teacher,
            export,
        } => {
            let range = resolve_range(range, TEACHER_WEEK_DAYS)?;
            if let Some(t) = teacher {
                crud::require(&ctx.state.teachers, *t)?;
            }
            let rows = recap::teacher_recap(&ctx.state, range, *teacher);

            header(format!("Teacher attendance {} to {}", range.start, range.end));
            if rows.is_empty() {
                if range.weekdays() == 0 {
                    info("No working days in the selected range.");
                } else {
                    info("No teachers.");
                }
            } else {
                let avg = rows.iter().map(|r| r.percentage).sum::<f64>() / rows.len() as f64;
                let result = RecapExport::Teachers(rows);
                let mut table = Table::new(result.headers());
                for row in result.table() {
                    table.add_row(row);
                }
                print!("{}", table.render());
                println!(
                    "\nAverage attendance: {}{}%{}",
                    color_for_percentage(avg),
                    percent(avg),
                    RESET
                );
                export_if_requested(&result, range, export)?;
            }
        }
    }
    Ok(())
}
