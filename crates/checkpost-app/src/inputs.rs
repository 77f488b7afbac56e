//! Building the report input record from the environment and working directory.

use camino::Utf8Path;
use checkpost_settings::ReportSources;
use checkpost_types::{ReportInputs, ids};

/// Read a UTF-8 text file, treating any failure as absence.
///
/// Invalid UTF-8 is decoded lossily rather than rejected.
pub fn read_optional(path: &Utf8Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            tracing::debug!(%path, %err, "optional input not readable");
            None
        }
    }
}

/// Collect report inputs: statuses from `lookup`, auxiliary files from `workdir`.
///
/// Never fails; missing pieces fall back to their defaults.
pub fn load_inputs<F>(workdir: &Utf8Path, lookup: F) -> ReportInputs
where
    F: Fn(&str) -> Option<String>,
{
    let sources = ReportSources::from_lookup(lookup)
        .with_test_errors(read_optional(&workdir.join(ids::FILE_TEST_ERRORS)))
        .with_coverage_detail(read_optional(&workdir.join(ids::FILE_COVERAGE_DETAIL)));

    let inputs = checkpost_settings::resolve_inputs(sources);
    tracing::debug!(
        format = inputs.format_status.as_str(),
        lint = inputs.lint_status.as_str(),
        type_check = inputs.type_status.as_str(),
        coverage = inputs.coverage_status.as_str(),
        percent = inputs.coverage_percent.as_str(),
        threshold = inputs.coverage_threshold,
        "loaded report inputs"
    );
    inputs
}
