use serde::Deserialize;
use std::collections::BTreeMap;

use crate::CoverageError;

/// The subset of a coverage.py `coverage json` report that the table needs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CoverageReport {
    pub files: BTreeMap<String, FileCoverage>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FileCoverage {
    pub summary: FileSummary,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FileSummary {
    pub percent_covered: f64,
    pub num_statements: u64,
    pub missing_lines: u64,
}

pub fn parse_coverage_json(text: &str) -> Result<CoverageReport, CoverageError> {
    Ok(serde_json::from_str(text)?)
}
