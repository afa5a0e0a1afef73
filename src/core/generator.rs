//! Synthetic shift records used as the report dataset.

use crate::models::{Property, ShiftRecord};
use crate::utils::date::random_date_between;
use chrono::{NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: [&str; 6] = ["John", "Jane", "Alice", "Bob", "Charlie", "Diana"];
const LAST_NAMES: [&str; 6] = ["Doe", "Smith", "Johnson", "Williams", "Brown", "Jones"];

/// Worked time bounds in seconds: 1 minute .. 8 hours.
pub const MIN_WORKED_SECS: u32 = 60;
pub const MAX_WORKED_SECS: u32 = 8 * 3600;

pub const MIN_UNITS: u32 = 1;
pub const MAX_UNITS: u32 = 50;

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

fn last_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default()
}

/// Random `H:MM AM/PM` clock time: hour 1..=12, minute 0..=59, AM or PM.
fn random_check_in<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let hour12 = rng.gen_range(1..=12u32);
    let minute = rng.gen_range(0..=59u32);
    let pm = rng.gen_bool(0.5);
    let hour24 = (hour12 % 12) + if pm { 12 } else { 0 };
    NaiveTime::from_hms_opt(hour24, minute, 0).unwrap_or_default()
}

fn random_employee<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

fn random_property<R: Rng + ?Sized>(rng: &mut R) -> Property {
    Property::ALL[rng.gen_range(0..Property::ALL.len())]
}

/// Generate `count` records from the given random source.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ShiftRecord> {
    let (start, end) = (first_day(), last_day());

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let date = random_date_between(rng, start, end);
        let check_in = random_check_in(rng);
        let worked = rng.gen_range(MIN_WORKED_SECS..=MAX_WORKED_SECS);
        let units = rng.gen_range(MIN_UNITS..=MAX_UNITS);
        let employee = random_employee(rng);
        let property = random_property(rng);

        records.push(ShiftRecord::new(&employee, date, property, check_in, worked, units));
    }
    records
}

/// Generate `count` records, reproducibly when a seed is given.
pub fn generate_records(count: usize, seed: Option<u64>) -> Vec<ShiftRecord> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    generate(count, &mut rng)
}
