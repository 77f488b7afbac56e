//! Coverage detail generation: coverage.py JSON in, markdown table out.
//!
//! This crate is IO-free; callers read the JSON and write the table.

#![forbid(unsafe_code)]

mod model;
mod table;

pub use model::{CoverageReport, FileCoverage, FileSummary, parse_coverage_json};
pub use table::{CoverageBand, render_coverage_table};

/// Errors produced while reading a coverage report.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("invalid coverage JSON: {0}")]
    Json(#[from] serde_json::Error),
}
