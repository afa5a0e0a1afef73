use crate::core::calculator::{filter, grouping, stats};
use crate::errors::{AppError, AppResult};
use crate::models::{DisplayRow, EmployeeStat, Filters, ShiftRecord};
use crate::utils::mins2readable;
use crate::utils::time::fixed2;

/// Page sizes offered by the table view.
pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Everything the presentation layer needs for one set of selections.
#[derive(Debug, Clone)]
pub struct PayrollReport {
    pub filtered: Vec<ShiftRecord>,
    pub grouped: Vec<DisplayRow>,
    pub most_hours: EmployeeStat<i64>,
    pub most_efficient: EmployeeStat<f64>,
}

impl PayrollReport {
    /// Number of filtered shift records (subtotal rows not counted).
    pub fn total(&self) -> usize {
        self.filtered.len()
    }
}

/// One page of the grouped table.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub number: usize,
    pub size: usize,
    pub rows: &'a [DisplayRow],
    pub total: usize,
}

pub struct Core;

impl Core {
    /// Re-derive filtered list, grouped rows and both statistics.
    pub fn build_report(records: &[ShiftRecord], filters: &Filters) -> PayrollReport {
        let filtered = filter::filter_records(records, filters);
        let grouped = grouping::group_records(&filtered);
        let most_hours = stats::most_hours(&filtered);
        let most_efficient = stats::most_efficient(&filtered);

        PayrollReport {
            filtered,
            grouped,
            most_hours,
            most_efficient,
        }
    }

    /// Slice the grouped rows for a 1-based page number.
    ///
    /// Pages index the grouped rows (subtotals included) while `total`
    /// reports the filtered record count. Page 0 is treated as page 1 and a
    /// page past the end is empty.
    pub fn paginate(report: &PayrollReport, page: usize, size: usize) -> AppResult<Page<'_>> {
        if !PAGE_SIZES.contains(&size) {
            return Err(AppError::InvalidPageSize(size));
        }

        let number = page.max(1);
        let start = (number - 1).saturating_mul(size).min(report.grouped.len());
        let end = start.saturating_add(size).min(report.grouped.len());

        Ok(Page {
            number,
            size,
            rows: &report.grouped[start..end],
            total: report.total(),
        })
    }

    pub fn describe_most_hours(stat: &EmployeeStat<i64>) -> String {
        if stat.is_empty() {
            return "No shifts match the current filters.".to_string();
        }
        format!(
            "The employee with the most hours worked is: {} with {} minutes ({}).",
            stat.name,
            stat.value,
            mins2readable(stat.value)
        )
    }

    /// The sentinel `+inf` is never printed.
    pub fn describe_most_efficient(stat: &EmployeeStat<f64>) -> String {
        if stat.is_empty() || !stat.value.is_finite() {
            return "No shifts match the current filters.".to_string();
        }
        format!(
            "The most efficient employee is: {} with an average of {} seconds per unit.",
            stat.name,
            fixed2(stat.value)
        )
    }
}
