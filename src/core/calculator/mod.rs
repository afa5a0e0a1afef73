pub mod filter;
pub mod grouping;
pub mod stats;
