// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::RecapExport;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: the typed recap rows.
pub(crate) fn export_json(recap: &RecapExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = match recap {
        RecapExport::Students(rows) => serde_json::to_string_pretty(rows)?,
        RecapExport::Teachers(rows) => serde_json::to_string_pretty(rows)?,
    };

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the recap headers.
pub(crate) fn export_csv(recap: &RecapExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(recap.headers())?;
    for row in recap.table() {
        wtr.write_record(&row)?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
