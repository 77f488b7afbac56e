//! Rendering of the pull-request quality report comment.
//!
//! Every section is a pure function of [`ReportInputs`]; the report is the
//! sections concatenated in a fixed order.
//!
//! [`ReportInputs`]: checkpost_types::ReportInputs

#![forbid(unsafe_code)]

mod markdown;
mod sections;

#[cfg(test)]
mod proptest;

pub use markdown::render_report;
pub use sections::{
    coverage_section, footer_section, static_section, summary_section, title_section,
};
