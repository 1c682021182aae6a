// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecapExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::DateRange;
use std::path::PathBuf;

/// High-level export of attendance recaps.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `recap` as `format`.
    ///
    /// Without `file` the default name
    /// (`rekap_kehadiran[_guru]_<start>_<end>.<ext>`) is used in the current
    /// directory. An empty recap writes nothing and returns `None`.
    pub fn export(
        recap: &RecapExport,
        range: DateRange,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if recap.is_empty() {
            warning("No data found for the selected range, nothing exported.");
            return Ok(None);
        }

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(recap.default_file_name(range, format.as_str())),
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(recap, &path)?,
            ExportFormat::Json => export_json(recap, &path)?,
            ExportFormat::Xlsx => export_xlsx(recap, &path)?,
        }

        Ok(Some(path))
    }
}
