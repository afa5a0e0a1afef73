//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

/// Remove ANSI escape sequences (colors, bold) from a string.
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// Width of the text as it appears on the terminal.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Minutes as `HHh MMm`, e.g. 145 → `02h 25m`.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}
