use super::property::Property;
use crate::utils::date::format_date;
use crate::utils::time::{fixed2, format_clock, worked_label};
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One employee's work session.
///
/// Every field is kept in its display form; the serialized names are the
/// column headers of the CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub employee_name: String,  // "First Last"
    pub date: String,           // MM-DD-YYYY
    pub property_name: String,  // "Property A".."Property E"
    pub check_in: String,       // H:MM AM/PM
    pub check_out: String,      // H:MM AM/PM
    pub time_worked: String,    // "<min> min <sec> sec"
    pub no_of_units: u32,       // >= 1
    pub avg_sec_per_unit: String, // worked seconds / units, 2 decimals
}

impl ShiftRecord {
    /// Build a record from its raw parts, deriving every label.
    /// - `check_out` = `check_in` + `worked_secs` (wraps past midnight)
    /// - `avg_sec_per_unit` = `worked_secs / units` (0 when `units == 0`)
    pub fn new(
        employee_name: &str,
        date: NaiveDate,
        property: Property,
        check_in: NaiveTime,
        worked_secs: u32,
        units: u32,
    ) -> Self {
        let (check_out, _) =
            check_in.overflowing_add_signed(Duration::seconds(i64::from(worked_secs)));
        let avg = if units > 0 {
            f64::from(worked_secs) / f64::from(units)
        } else {
            0.0
        };

        Self {
            employee_name: employee_name.to_string(),
            date: format_date(date),
            property_name: property.as_str().to_string(),
            check_in: format_clock(check_in),
            check_out: format_clock(check_out),
            time_worked: worked_label(worked_secs),
            no_of_units: units,
            avg_sec_per_unit: fixed2(avg),
        }
    }

    /// Case-insensitive containment on employee or property name.
    /// `needle_lower` must already be lowercase.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.employee_name.to_lowercase().contains(needle_lower)
            || self.property_name.to_lowercase().contains(needle_lower)
    }
}
