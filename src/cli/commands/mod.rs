pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod stats;

use crate::config::Config;
use crate::core::generator::generate_records;
use crate::models::ShiftRecord;

/// Dataset for this process: generated once, never mutated.
pub(crate) fn load_dataset(cfg: &Config) -> Vec<ShiftRecord> {
    generate_records(cfg.record_count, cfg.seed)
}
