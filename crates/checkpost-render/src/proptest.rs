//! Property-based tests for the report renderer.
//!
//! These tests use proptest to verify invariants around:
//! - render determinism
//! - static failure detection
//! - presence of the coverage body

use crate::{coverage_section, render_report};
use checkpost_types::{CheckStatus, CoveragePercent, ReportInputs};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Statuses a workflow normally emits, plus unset.
fn arb_known_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("success".to_string()),
        Just("failure".to_string()),
        Just("pending".to_string()),
        Just(String::new()),
    ]
}

/// Any short status string, biased towards near-misses of `failure`.
fn arb_any_status() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_known_status(),
        Just("Failure".to_string()),
        Just("FAILURE".to_string()),
        Just(" failure".to_string()),
        Just("failed".to_string()),
        "[a-zA-Z ]{0,12}",
    ]
}

fn arb_percent() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("N/A".to_string()),
        Just(String::new()),
        (0u32..=100).prop_map(|p| p.to_string()),
        (0u32..=1000).prop_map(|p| format!("{}.{}", p / 10, p % 10)),
    ]
}

fn arb_inputs(status: BoxedStrategy<String>) -> impl Strategy<Value = ReportInputs> {
    (
        status.clone(),
        status.clone(),
        status.clone(),
        status,
        arb_percent(),
        1i64..=100,
        prop_oneof![Just(String::new()), "[a-zA-Z:!= ]{1,40}"],
        prop_oneof![Just(String::new()), "[|a-z0-9 ]{1,40}"],
    )
        .prop_map(
            |(format, lint, ty, coverage, percent, threshold, errors, detail)| ReportInputs {
                format_status: CheckStatus::parse(&format),
                lint_status: CheckStatus::parse(&lint),
                type_status: CheckStatus::parse(&ty),
                coverage_status: CheckStatus::parse(&coverage),
                coverage_percent: CoveragePercent::new(percent),
                coverage_threshold: threshold,
                test_errors: errors,
                coverage_detail: detail,
            },
        )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn render_is_deterministic(inputs in arb_inputs(arb_known_status().boxed())) {
        let first = render_report(&inputs);
        let second = render_report(&inputs.clone());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn static_failure_iff_exact_failure(
        format in arb_any_status(),
        lint in arb_any_status(),
        ty in arb_any_status(),
    ) {
        let inputs = ReportInputs {
            format_status: CheckStatus::parse(&format),
            lint_status: CheckStatus::parse(&lint),
            type_status: CheckStatus::parse(&ty),
            ..ReportInputs::default()
        };
        let expected = [&format, &lint, &ty].iter().any(|s| s.as_str() == "failure");
        prop_assert_eq!(inputs.static_check_failed(), expected);

        let md = render_report(&inputs);
        prop_assert_eq!(md.contains("❌ **失败** - 请修复以下问题："), expected);
        prop_assert_eq!(md.contains("### ⚠️ 请先修复静态检查问题"), expected);
    }

    #[test]
    fn coverage_body_present_iff_known_status(inputs in arb_inputs(arb_any_status().boxed())) {
        let section = coverage_section(&inputs);
        let known = matches!(
            inputs.coverage_status,
            CheckStatus::Success | CheckStatus::Failure | CheckStatus::Pending
        );
        prop_assert_eq!(section != "### 测试覆盖率\n", known);
    }

    #[test]
    fn report_frame_is_fixed(inputs in arb_inputs(arb_any_status().boxed())) {
        let md = render_report(&inputs);
        prop_assert!(md.starts_with("## 🔍 代码质量检查报告\n\n### 静态代码检查\n"));
        prop_assert!(md.ends_with("\n*🤖 此评论由 GitHub Actions 自动生成*"));
        prop_assert_eq!(md.matches("\n---\n").count(), 1);
    }
}
