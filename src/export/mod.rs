// src/export/mod.rs

pub(crate) mod excel_date;
pub(crate) mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
pub mod template;
mod xlsx;

pub use logic::ExportLogic;
pub use model::RecapExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Format implied by the extension of `path`; CSV when unknown.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => ExportFormat::Json,
            Some("xlsx") => ExportFormat::Xlsx,
            _ => ExportFormat::Csv,
        }
    }
}
