//! Stable DTOs and keys used across the checkpost workspace.
//!
//! This crate is intentionally boring:
//! - check status and coverage percent values as read from CI
//! - the report input record consumed by the renderer
//! - well-known environment variable names, file names, and defaults

#![forbid(unsafe_code)]

pub mod ids;
mod inputs;
mod status;

pub use inputs::ReportInputs;
pub use status::{CheckStatus, CoveragePercent, StaticCheck};
