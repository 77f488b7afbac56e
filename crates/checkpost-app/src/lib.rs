//! Use case orchestration for checkpost.
//!
//! This crate provides the application layer: it reads the environment and the
//! working directory, calls the pure render/coverage layers, and talks to GitHub
//! at the very end.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod comment;
mod coverage;
mod inputs;
mod render;

pub use comment::{CommentInput, CommentOutcome, TargetOverrides, resolve_target, run_comment};
pub use coverage::{CoverageDetailInput, run_coverage_detail};
pub use inputs::{load_inputs, read_optional};
pub use render::{run_render, write_text};
