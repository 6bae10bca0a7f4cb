//! Export reports consuming the evaluator's per-point output.

mod csv;
mod rows;

pub use csv::write_csv;
pub use rows::{build_rows, to_json, ReportRow};
