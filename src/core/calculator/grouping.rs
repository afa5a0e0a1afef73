use crate::models::{DisplayRow, ShiftRecord, TotalRow};
use crate::utils::time::{fixed2, leading_minutes};

/// Sort records by employee and append a subtotal after each employee's run.
///
/// The sort is stable, so records of the same employee keep their input
/// order. Each shift row gets `key` = its position in the sorted sequence.
pub fn group_records(filtered: &[ShiftRecord]) -> Vec<DisplayRow> {
    let mut sorted: Vec<&ShiftRecord> = filtered.iter().collect();
    sorted.sort_by(|a, b| a.employee_name.cmp(&b.employee_name));

    let mut grouped = Vec::with_capacity(sorted.len() + sorted.len() / 2);
    let mut run_start = 0;

    for (index, record) in sorted.iter().enumerate() {
        let closes_run = sorted
            .get(index + 1)
            .is_none_or(|next| next.employee_name != record.employee_name);

        if closes_run {
            let run = &sorted[run_start..=index];
            grouped.extend(run.iter().enumerate().map(|(offset, r)| DisplayRow::Shift {
                key: run_start + offset,
                record: (*r).clone(),
            }));
            grouped.push(DisplayRow::Total(subtotal(&record.employee_name, run)));
            run_start = index + 1;
        }
    }

    grouped
}

/// Subtotal of one employee's run.
///
/// Worked time only counts the leading minutes of each label; seconds are
/// dropped before summing.
fn subtotal(employee: &str, run: &[&ShiftRecord]) -> TotalRow {
    let minutes: i64 = run.iter().map(|r| leading_minutes(&r.time_worked)).sum();
    let units: u64 = run.iter().map(|r| u64::from(r.no_of_units)).sum();

    let avg = if units > 0 {
        (minutes * 60) as f64 / units as f64
    } else {
        0.0
    };

    TotalRow {
        employee_name: employee.to_string(),
        total_time_worked: format!("{minutes} min"),
        total_units: units,
        avg_sec_per_unit: fixed2(avg),
    }
}
