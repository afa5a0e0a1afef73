use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Canonical textual form used by every record and filter.
pub const DATE_FMT: &str = "%m-%d-%Y";

/// Alternative input form accepted on the command line.
const ISO_FMT: &str = "%Y-%m-%d";

/// Render a date as zero-padded `MM-DD-YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.month(), date.day(), date.year())
}

/// Parse `MM-DD-YYYY` (canonical) or `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FMT)
        .or_else(|_| NaiveDate::parse_from_str(s, ISO_FMT))
        .ok()
}

/// Normalize any accepted date text to the canonical form.
pub fn normalize_date(s: &str) -> Option<String> {
    parse_date(s).map(format_date)
}

/// Inclusive calendar-date comparison of three `MM-DD-YYYY` strings.
///
/// If any of the three strings cannot be parsed the date is considered
/// outside the range, so malformed input always yields `false`.
pub fn is_date_in_range(date: &str, start: &str, end: &str) -> bool {
    match (parse_canonical(date), parse_canonical(start), parse_canonical(end)) {
        (Some(d), Some(s), Some(e)) => s <= d && d <= e,
        _ => false,
    }
}

fn parse_canonical(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

/// Uniformly pick a calendar day in `[start, end]`.
pub fn random_date_between<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    let offset = rng.gen_range(0..=span);
    start + chrono::Duration::days(offset)
}
