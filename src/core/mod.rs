pub mod calculator;
pub mod generator;
pub mod logic;

pub use logic::{Core, Page, PayrollReport};
