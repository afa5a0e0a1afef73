use super::shift::ShiftRecord;
use serde::Serialize;

/// Synthetic subtotal for one employee's run of shifts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRow {
    pub employee_name: String,
    pub total_time_worked: String, // "<N> min"
    pub total_units: u64,
    pub avg_sec_per_unit: String, // 2 decimals
}

/// Entry of the grouped table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayRow {
    Shift { key: usize, record: ShiftRecord },
    Total(TotalRow),
}

impl DisplayRow {
    pub fn employee_name(&self) -> &str {
        match self {
            DisplayRow::Shift { record, .. } => &record.employee_name,
            DisplayRow::Total(total) => &total.employee_name,
        }
    }

    pub fn is_total(&self) -> bool {
        matches!(self, DisplayRow::Total(_))
    }
}
