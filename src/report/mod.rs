//! Per-category sales aggregation and CSV export

pub mod aggregate;
pub mod writer;

pub use aggregate::{aggregate_sales, CategorySummary};
pub use writer::{read_summary, write_summary};
