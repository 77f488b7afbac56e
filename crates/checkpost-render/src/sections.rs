//! Report sections. Each returns its markdown fragment, newlines included.

use checkpost_types::{CheckStatus, ReportInputs, StaticCheck};

const TITLE: &str = "## 🔍 代码质量检查报告\n\n";

const STATIC_HEADER: &str = "### 静态代码检查\n";
const STATIC_FAILED: &str = "❌ **失败** - 请修复以下问题：\n\n";
const STATIC_FAILED_HINT: &str = "> 💡 **提示**：要查看详细的错误注释，请在 Files Changed 标签页右上角点击 ✨ \"Try the new experience\"，然后在侧边栏中查看错误和警告列表。\n\n";
const STATIC_PASSED: &str = "✅ **通过**\n\n";

const COVERAGE_HEADER: &str = "### 测试覆盖率\n";
const COVERAGE_SKIPPED_BLOCKED: &str = "⏭️ **跳过** - 请先修复静态检查问题\n\n";
const COVERAGE_SKIPPED_HINT: &str = "> 修复静态检查问题后，测试将自动运行\n";
const COVERAGE_SKIPPED: &str = "⏭️ **跳过**\n";
const TESTS_FAILED: &str = "❌ **测试失败** - 部分测试用例未通过\n\n";
const DETAIL_SUMMARY_COVERAGE: &str = "查看覆盖率最低的文件";
const DETAIL_SUMMARY_ERRORS: &str = "查看测试错误详情";

const SEPARATOR: &str = "\n---\n";
const SUMMARY_ALL_PASSED: &str = "### 🎉 所有检查通过！\n";
const SUMMARY_FIX_STATIC: &str = "### ⚠️ 请先修复静态检查问题\n";
const SUMMARY_RAISE_COVERAGE: &str = "### ⚠️ 请提高测试覆盖率\n";
const SUMMARY_FIX_TESTS: &str = "### ⚠️ 请修复测试失败的问题\n";

const FOOTER: &str = "\n*🤖 此评论由 GitHub Actions 自动生成*";

pub fn title_section(_inputs: &ReportInputs) -> String {
    TITLE.to_string()
}

/// Static checks: pass/fail banner, then one bullet per check in fixed order.
pub fn static_section(inputs: &ReportInputs) -> String {
    let mut out = String::from(STATIC_HEADER);

    if inputs.static_check_failed() {
        out.push_str(STATIC_FAILED);
        out.push_str(STATIC_FAILED_HINT);
    } else {
        out.push_str(STATIC_PASSED);
    }

    for check in StaticCheck::ALL {
        out.push_str(&check_line(check, inputs.status_of(check)));
    }

    out.push('\n');
    out
}

fn check_line(check: StaticCheck, status: &CheckStatus) -> String {
    match status {
        CheckStatus::Success => format!("- ✅ {}\n", check.label()),
        CheckStatus::Failure => format!("- ❌ {}\n", check.label()),
        _ => format!("- ⏭️ {}（跳过）\n", check.label()),
    }
}

/// Coverage: header, then a body that depends on the coverage status.
///
/// Statuses other than success/failure/pending get the header only.
pub fn coverage_section(inputs: &ReportInputs) -> String {
    let mut out = String::from(COVERAGE_HEADER);
    let percent = &inputs.coverage_percent;
    let threshold = inputs.coverage_threshold;

    match &inputs.coverage_status {
        CheckStatus::Pending => {
            if inputs.static_check_failed() {
                out.push_str(COVERAGE_SKIPPED_BLOCKED);
                out.push_str(COVERAGE_SKIPPED_HINT);
            } else {
                out.push_str(COVERAGE_SKIPPED);
            }
        }
        CheckStatus::Success => {
            out.push_str(&format!(
                "✅ **通过** (覆盖率: {percent}% ≥ {threshold}%)\n\n"
            ));
            out.push_str(&coverage_detail_block(&inputs.coverage_detail));
        }
        CheckStatus::Failure if percent.is_measured() => {
            out.push_str(&format!(
                "❌ **失败** (覆盖率: {percent}% < {threshold}%)\n\n"
            ));
            out.push_str(&coverage_detail_block(&inputs.coverage_detail));
        }
        CheckStatus::Failure => {
            out.push_str(TESTS_FAILED);
            out.push_str(&test_errors_block(&inputs.test_errors));
        }
        CheckStatus::Other(_) => {}
    }

    out
}

fn coverage_detail_block(detail: &str) -> String {
    if detail.is_empty() {
        return String::new();
    }
    format!("<details>\n<summary>{DETAIL_SUMMARY_COVERAGE}</summary>\n\n{detail}\n</details>\n")
}

fn test_errors_block(errors: &str) -> String {
    if errors.is_empty() {
        return String::new();
    }
    format!(
        "<details>\n<summary>{DETAIL_SUMMARY_ERRORS}</summary>\n\n```\n{errors}\n```\n\n</details>\n"
    )
}

/// Separator plus the highest-priority summary line, if any applies.
pub fn summary_section(inputs: &ReportInputs) -> String {
    let line = if inputs.all_passed() {
        SUMMARY_ALL_PASSED
    } else if inputs.static_check_failed() {
        SUMMARY_FIX_STATIC
    } else if inputs.coverage_status == CheckStatus::Failure {
        if inputs.coverage_percent.is_measured() {
            SUMMARY_RAISE_COVERAGE
        } else {
            SUMMARY_FIX_TESTS
        }
    } else {
        ""
    };

    format!("{SEPARATOR}{line}")
}

pub fn footer_section(_inputs: &ReportInputs) -> String {
    FOOTER.to_string()
}
