use checkpost_types::ids;

/// Raw, unvalidated report sources as the CI workflow provides them.
///
/// `None` means "not set"; resolution treats it the same as an empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportSources {
    pub format_status: Option<String>,
    pub lint_status: Option<String>,
    pub type_status: Option<String>,
    pub coverage_status: Option<String>,
    pub coverage_percent: Option<String>,
    pub coverage_threshold: Option<String>,
    /// Contents of `test-errors.txt`, if it could be read.
    pub test_errors: Option<String>,
    /// Contents of `coverage-detail.md`, if it could be read.
    pub coverage_detail: Option<String>,
}

impl ReportSources {
    /// Collect the environment-backed fields through `lookup`.
    ///
    /// File-backed fields are left unset; the caller reads them.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            format_status: lookup(ids::ENV_FORMAT_STATUS),
            lint_status: lookup(ids::ENV_LINT_STATUS),
            type_status: lookup(ids::ENV_TYPE_STATUS),
            coverage_status: lookup(ids::ENV_COVERAGE_STATUS),
            coverage_percent: lookup(ids::ENV_COVERAGE_PERCENT),
            coverage_threshold: lookup(ids::ENV_COVERAGE_THRESHOLD),
            test_errors: None,
            coverage_detail: None,
        }
    }

    pub fn with_test_errors(mut self, contents: Option<String>) -> Self {
        self.test_errors = contents;
        self
    }

    pub fn with_coverage_detail(mut self, contents: Option<String>) -> Self {
        self.coverage_detail = contents;
        self
    }
}
