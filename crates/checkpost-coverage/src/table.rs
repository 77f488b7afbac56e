use crate::CoverageReport;

const TABLE_HEADER: &str = "| 文件 | 覆盖率 | 语句 | 未覆盖 |\n|------|--------|------|--------|\n";

/// Coverage quality band used to pick a row icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverageBand {
    Good,
    Fair,
    Poor,
}

impl CoverageBand {
    pub fn of(percent: f64) -> Self {
        if percent >= 80.0 {
            CoverageBand::Good
        } else if percent >= 60.0 {
            CoverageBand::Fair
        } else {
            CoverageBand::Poor
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CoverageBand::Good => "🟢",
            CoverageBand::Fair => "🟡",
            CoverageBand::Poor => "🔴",
        }
    }
}

/// Render the `top_n` least-covered files as a markdown table.
///
/// Rows are ordered by ascending coverage; ties keep path order.
pub fn render_coverage_table(report: &CoverageReport, top_n: usize) -> String {
    let mut files: Vec<_> = report.files.iter().collect();
    files.sort_by(|(_, a), (_, b)| {
        a.summary
            .percent_covered
            .total_cmp(&b.summary.percent_covered)
    });

    let mut out = String::from(TABLE_HEADER);
    for (path, file) in files.into_iter().take(top_n) {
        let s = &file.summary;
        out.push_str(&format!(
            "| {} | {} {:.1}% | {} | {} |\n",
            path,
            CoverageBand::of(s.percent_covered).icon(),
            s.percent_covered,
            s.num_statements,
            s.missing_lines
        ));
    }
    out
}
