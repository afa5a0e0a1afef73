use crate::models::{Filters, ShiftRecord};
use crate::utils::date::{format_date, is_date_in_range};

/// Reduce the record set according to the current selections.
///
/// Rules, in order:
/// 1. a non-empty search keeps records whose employee or property name
///    contains it (case-insensitive);
/// 2. a complete date range keeps records inside it, inclusive, and the
///    single-date selection is ignored;
/// 3. otherwise a single date keeps records on exactly that date.
///
/// Relative order of the input is preserved.
pub fn filter_records(records: &[ShiftRecord], filters: &Filters) -> Vec<ShiftRecord> {
    let needle = filters.search.to_lowercase();

    let mut data: Vec<&ShiftRecord> = if needle.is_empty() {
        records.iter().collect()
    } else {
        records.iter().filter(|r| r.matches_search(&needle)).collect()
    };

    if let Some((start, end)) = filters.date_range.bounds() {
        let (start, end) = (format_date(start), format_date(end));
        data.retain(|r| is_date_in_range(&r.date, &start, &end));
    } else if let Some(day) = filters.single_date {
        let day = format_date(day);
        data.retain(|r| r.date == day);
    }

    data.into_iter().cloned().collect()
}
