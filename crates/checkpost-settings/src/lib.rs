//! Input resolution: raw CI values to a typed report input record.
//!
//! This crate is intentionally IO-free: environment values and file contents are
//! supplied by the caller as strings.

#![forbid(unsafe_code)]

mod resolve;
mod sources;

pub use resolve::{parse_threshold, resolve_file_count, resolve_inputs};
pub use sources::ReportSources;
