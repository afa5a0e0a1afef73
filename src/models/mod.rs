pub mod display_row;
pub mod employee_stat;
pub mod filters;
pub mod property;
pub mod shift;

pub use display_row::{DisplayRow, TotalRow};
pub use employee_stat::EmployeeStat;
pub use filters::{DateRange, Filters};
pub use property::Property;
pub use shift::ShiftRecord;
