//! Well-known environment variables, file names, and defaults.

// Check results
pub const ENV_FORMAT_STATUS: &str = "FORMAT_STATUS";
pub const ENV_LINT_STATUS: &str = "LINT_STATUS";
pub const ENV_TYPE_STATUS: &str = "TYPE_STATUS";
pub const ENV_COVERAGE_STATUS: &str = "COVERAGE_STATUS";
pub const ENV_COVERAGE_PERCENT: &str = "COVERAGE_PERCENT";
pub const ENV_COVERAGE_THRESHOLD: &str = "COVERAGE_THRESHOLD";
pub const ENV_COVERAGE_DETAIL_FILE_COUNT: &str = "COVERAGE_DETAIL_FILE_COUNT";

// GitHub Actions context
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_GITHUB_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";

// Auxiliary files (relative to the working directory)
pub const FILE_TEST_ERRORS: &str = "test-errors.txt";
pub const FILE_COVERAGE_DETAIL: &str = "coverage-detail.md";
pub const FILE_COVERAGE_JSON: &str = "coverage.json";

// Defaults
pub const DEFAULT_COVERAGE_THRESHOLD: i64 = 59;
pub const DEFAULT_COVERAGE_DETAIL_FILE_COUNT: usize = 10;
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Placeholder used when no coverage percentage was measured.
pub const COVERAGE_NOT_AVAILABLE: &str = "N/A";
