// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod json;
pub mod logic;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "payroll_data.csv";

/// Common completion notice for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Output path when `--file` is not given: the configured export file with
/// its extension switched to the chosen format.
pub fn default_export_path(export_file: &str, format: &ExportFormat) -> PathBuf {
    Path::new(export_file).with_extension(format.as_str())
}

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
