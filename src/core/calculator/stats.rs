use crate::models::{EmployeeStat, ShiftRecord};
use crate::utils::time::leading_minutes;

/// Per-employee accumulators in first-seen order.
fn accumulate<T, F>(records: &[ShiftRecord], mut fold: F) -> Vec<(&str, T)>
where
    T: Default,
    F: FnMut(&mut T, &ShiftRecord),
{
    let mut acc: Vec<(&str, T)> = Vec::new();
    for r in records {
        let pos = match acc.iter().position(|(name, _)| *name == r.employee_name) {
            Some(p) => p,
            None => {
                acc.push((r.employee_name.as_str(), T::default()));
                acc.len() - 1
            }
        };
        fold(&mut acc[pos].1, r);
    }
    acc
}

/// Employee with the largest sum of worked minutes.
///
/// Ties go to the employee seen first; an empty input yields `("", 0)`.
pub fn most_hours(records: &[ShiftRecord]) -> EmployeeStat<i64> {
    let totals = accumulate(records, |total: &mut i64, r| {
        *total += leading_minutes(&r.time_worked);
    });

    totals
        .into_iter()
        .fold(EmployeeStat::new("", 0), |best, (name, minutes)| {
            if best.is_empty() || minutes > best.value {
                EmployeeStat::new(name, minutes)
            } else {
                best
            }
        })
}

/// Employee with the lowest mean of per-shift average seconds per unit.
///
/// The mean is over shifts, not weighted by units. Unparsable averages
/// count as 0. Ties go to the employee seen first; an empty input yields
/// `("", +inf)`.
pub fn most_efficient(records: &[ShiftRecord]) -> EmployeeStat<f64> {
    let sums = accumulate(records, |(total, count): &mut (f64, u32), r| {
        *total += r.avg_sec_per_unit.trim().parse::<f64>().unwrap_or(0.0);
        *count += 1;
    });

    sums.into_iter()
        .map(|(name, (total, count))| (name, total / f64::from(count)))
        .fold(EmployeeStat::new("", f64::INFINITY), |best, (name, mean)| {
            if best.is_empty() || mean < best.value {
                EmployeeStat::new(name, mean)
            } else {
                best
            }
        })
}
