use crate::ids::COVERAGE_NOT_AVAILABLE;

/// Result of a single CI check as reported by the workflow.
///
/// Matching is exact and case-sensitive. Values other than the three known
/// ones are kept verbatim so callers can tell "unknown" from "pending".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    Success,
    Failure,
    #[default]
    Pending,
    Other(String),
}

impl CheckStatus {
    /// Parse a raw status string. Empty input is `Pending`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => CheckStatus::Success,
            "failure" => CheckStatus::Failure,
            "pending" | "" => CheckStatus::Pending,
            other => CheckStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CheckStatus::Success => "success",
            CheckStatus::Failure => "failure",
            CheckStatus::Pending => "pending",
            CheckStatus::Other(s) => s,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CheckStatus::Failure)
    }
}

/// Measured coverage percentage, kept as the raw string CI produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CoveragePercent(String);

impl CoveragePercent {
    /// Empty input becomes `"N/A"`.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            Self::not_available()
        } else {
            Self(raw)
        }
    }

    pub fn not_available() -> Self {
        Self(COVERAGE_NOT_AVAILABLE.to_string())
    }

    /// True unless the value is literally `"N/A"`.
    ///
    /// This distinguishes "threshold not met" from "tests failed". No numeric
    /// validation is performed: `"abc"` counts as measured.
    pub fn is_measured(&self) -> bool {
        self.0 != COVERAGE_NOT_AVAILABLE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CoveragePercent {
    fn default() -> Self {
        Self::not_available()
    }
}

impl std::fmt::Display for CoveragePercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The static checks, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StaticCheck {
    Format,
    Lint,
    Type,
}

impl StaticCheck {
    pub const ALL: [StaticCheck; 3] = [StaticCheck::Format, StaticCheck::Lint, StaticCheck::Type];

    pub fn label(self) -> &'static str {
        match self {
            StaticCheck::Format => "代码格式化",
            StaticCheck::Lint => "代码规范检查",
            StaticCheck::Type => "类型检查",
        }
    }
}
