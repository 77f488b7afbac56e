use checkpost_types::ReportInputs;

use crate::sections::{
    coverage_section, footer_section, static_section, summary_section, title_section,
};

/// Render the full comment body.
pub fn render_report(inputs: &ReportInputs) -> String {
    let sections: [fn(&ReportInputs) -> String; 5] = [
        title_section,
        static_section,
        coverage_section,
        summary_section,
        footer_section,
    ];

    sections.iter().map(|section| section(inputs)).collect()
}
