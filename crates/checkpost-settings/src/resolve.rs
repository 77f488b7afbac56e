use crate::sources::ReportSources;
use anyhow::Context;
use checkpost_types::ids::{DEFAULT_COVERAGE_DETAIL_FILE_COUNT, DEFAULT_COVERAGE_THRESHOLD};
use checkpost_types::{CheckStatus, CoveragePercent, ReportInputs};

/// Resolve raw sources into the renderer's input record. Never fails.
pub fn resolve_inputs(sources: ReportSources) -> ReportInputs {
    let status = |raw: &Option<String>| CheckStatus::parse(raw.as_deref().unwrap_or(""));

    ReportInputs {
        format_status: status(&sources.format_status),
        lint_status: status(&sources.lint_status),
        type_status: status(&sources.type_status),
        coverage_status: status(&sources.coverage_status),
        coverage_percent: CoveragePercent::new(sources.coverage_percent.unwrap_or_default()),
        coverage_threshold: parse_threshold(sources.coverage_threshold.as_deref()),
        test_errors: sources
            .test_errors
            .map(|s| s.trim_matches(is_trimmable).to_string())
            .unwrap_or_default(),
        coverage_detail: sources.coverage_detail.unwrap_or_default(),
    }
}

/// Whitespace as the workflow scripts trim it: Unicode whitespace plus the byte
/// order mark, but not NEL (U+0085).
fn is_trimmable(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Parse the coverage threshold, falling back to the default.
///
/// Accepts an integer prefix: leading whitespace, an optional sign, then digits.
/// Anything after the digits is ignored (`"70%"` is 70). No digits or a value of
/// zero yield the default.
///
/// A value outside `i64` also yields the default. The workflow scripts would
/// render such a value as an imprecise float; checkpost deliberately does not.
pub fn parse_threshold(raw: Option<&str>) -> i64 {
    raw.and_then(parse_int_prefix)
        .filter(|v| *v != 0)
        .unwrap_or(DEFAULT_COVERAGE_THRESHOLD)
}

fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Resolve how many files the coverage-detail table lists.
///
/// An explicit value wins over the environment value; both absent means the default.
pub fn resolve_file_count(explicit: Option<usize>, env_value: Option<&str>) -> anyhow::Result<usize> {
    if let Some(n) = explicit {
        return Ok(n);
    }
    match env_value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_COVERAGE_DETAIL_FILE_COUNT),
        Some(v) => v
            .parse::<usize>()
            .with_context(|| format!("invalid coverage detail file count: {v}")),
    }
}
