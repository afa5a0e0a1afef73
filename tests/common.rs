#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rpayroll::models::{Property, ShiftRecord};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpr() -> Command {
    cargo_bin_cmd!("rpayroll")
}

/// Command with an isolated (missing) config file, a fixed seed and record count.
pub fn rpr_seeded(name: &str, records: usize, seed: u64) -> Command {
    let cfg = temp_path(name, "conf");
    let mut cmd = rpr();
    cmd.args([
        "--config-file",
        &cfg,
        "--records",
        &records.to_string(),
        "--seed",
        &seed.to_string(),
    ]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpayroll.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn date(m: u32, d: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn nine_am() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid time")
}

/// Shift starting 9:00 AM at Property A.
pub fn shift(name: &str, day: NaiveDate, worked_secs: u32, units: u32) -> ShiftRecord {
    ShiftRecord::new(name, day, Property::A, nine_am(), worked_secs, units)
}

/// Alice Smith: 30 min / 10 units, Bob Jones: 60 min / 20 units.
pub fn alice_and_bob() -> Vec<ShiftRecord> {
    vec![
        shift("Alice Smith", date(2, 1, 2025), 1800, 10),
        shift("Bob Jones", date(3, 15, 2025), 3600, 20),
    ]
}
