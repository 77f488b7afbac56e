use crate::ids::DEFAULT_COVERAGE_THRESHOLD;
use crate::{CheckStatus, CoveragePercent, StaticCheck};

/// Everything the report renderer needs, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportInputs {
    pub format_status: CheckStatus,
    pub lint_status: CheckStatus,
    pub type_status: CheckStatus,
    pub coverage_status: CheckStatus,
    pub coverage_percent: CoveragePercent,
    pub coverage_threshold: i64,
    /// Trimmed contents of the test error file, or empty.
    pub test_errors: String,
    /// Verbatim contents of the coverage detail markdown, or empty.
    pub coverage_detail: String,
}

impl Default for ReportInputs {
    fn default() -> Self {
        Self {
            format_status: CheckStatus::Pending,
            lint_status: CheckStatus::Pending,
            type_status: CheckStatus::Pending,
            coverage_status: CheckStatus::Pending,
            coverage_percent: CoveragePercent::not_available(),
            coverage_threshold: DEFAULT_COVERAGE_THRESHOLD,
            test_errors: String::new(),
            coverage_detail: String::new(),
        }
    }
}

impl ReportInputs {
    pub fn status_of(&self, check: StaticCheck) -> &CheckStatus {
        match check {
            StaticCheck::Format => &self.format_status,
            StaticCheck::Lint => &self.lint_status,
            StaticCheck::Type => &self.type_status,
        }
    }

    /// True iff at least one static check reported exactly `failure`.
    pub fn static_check_failed(&self) -> bool {
        StaticCheck::ALL
            .iter()
            .any(|check| self.status_of(*check).is_failure())
    }

    /// Static checks passed and coverage succeeded.
    pub fn all_passed(&self) -> bool {
        !self.static_check_failed() && self.coverage_status == CheckStatus::Success
    }
}
