use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::filter::filter_records;
use crate::errors::AppResult;
use crate::export::{ExportLogic, default_export_path};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filters,
        format,
        file,
        force,
    } = cmd
    {
        let records = load_dataset(cfg);
        let filtered = filter_records(&records, &filters.to_filters());

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => default_export_path(&cfg.export_file, format),
        };
        ExportLogic::export(&filtered, format, &path, *force)?;
    }
    Ok(())
}
