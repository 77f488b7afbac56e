//! The `coverage-detail` use case: coverage.json to a markdown table file.

use anyhow::Context;
use camino::Utf8Path;

use crate::render::write_text;

/// Input for the coverage detail use case.
#[derive(Clone, Debug)]
pub struct CoverageDetailInput<'a> {
    pub input: &'a Utf8Path,
    pub output: &'a Utf8Path,
    pub top_n: usize,
}

/// Generate the lowest-coverage table.
///
/// On failure the output file still gets a one-line error message so the report
/// shows why the table is missing; the error is then returned.
pub fn run_coverage_detail(input: CoverageDetailInput<'_>) -> anyhow::Result<String> {
    match build_table(&input) {
        Ok(table) => {
            write_text(input.output, &table)?;
            tracing::info!(output = %input.output, "coverage detail written");
            Ok(table)
        }
        Err(err) => {
            let message = format!("生成覆盖率详情失败: {err:#}\n");
            write_text(input.output, &message)?;
            Err(err)
        }
    }
}

fn build_table(input: &CoverageDetailInput<'_>) -> anyhow::Result<String> {
    let text = std::fs::read_to_string(input.input)
        .with_context(|| format!("read coverage report: {}", input.input))?;
    let report = checkpost_coverage::parse_coverage_json(&text)
        .with_context(|| format!("parse coverage report: {}", input.input))?;
    tracing::debug!(files = report.files.len(), top_n = input.top_n, "rendering coverage table");
    Ok(checkpost_coverage::render_coverage_table(&report, input.top_n))
}
