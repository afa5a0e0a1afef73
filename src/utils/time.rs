//! Time utilities: wall-clock labels, worked-time labels and fixed-point formatting.

use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

/// Wall-clock label without leading zero on the hour, e.g. `9:05 AM`.
const CLOCK_FMT: &str = "%-I:%M %p";

pub fn format_clock(t: NaiveTime) -> String {
    t.format(CLOCK_FMT).to_string()
}

pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%I:%M %p").ok()
}

/// `"<minutes> min <seconds> sec"` for a duration given in seconds.
pub fn worked_label(seconds: u32) -> String {
    format!("{} min {} sec", seconds / 60, seconds % 60)
}

/// Integer value of the first whitespace-separated token of a label.
///
/// Only the leading integer prefix counts (`"30 min 59 sec"` → 30, seconds are
/// dropped). Anything without a leading integer contributes 0.
pub fn leading_minutes(label: &str) -> i64 {
    static LEADING_INT: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_INT.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").expect("static regex"));

    let token = label.split(' ').next().unwrap_or("");
    re.captures(token)
        .and_then(|c| c[1].parse::<i64>().ok())
        .unwrap_or(0)
}

/// Two-decimal fixed text, as shown in every average column.
///
/// Halves round away from zero (7.625 → "7.63"), not to even.
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}
