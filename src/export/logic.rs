// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::ShiftRecord;
use crate::ui::messages::{info, warning};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// High-level export of the filtered (ungrouped) records.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `records` to `path`.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    /// An empty selection still writes a file (CSV: header only).
    pub fn export(
        records: &[ShiftRecord],
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if records.is_empty() {
            warning("No records match the current filters; writing an empty export.");
        }

        info(format!(
            "Exporting {} record(s) to {}: {}",
            records.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let out = BufWriter::new(File::create(path)?);
        match format {
            ExportFormat::Csv => write_csv(records, out)?,
            ExportFormat::Json => write_json(records, out)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}
