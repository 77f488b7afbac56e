//! GitHub adapters: where to comment, and how to post the comment.
//!
//! This crate is allowed to do network and filesystem IO. It knows nothing about
//! report contents; callers hand it a finished body.

#![forbid(unsafe_code)]

mod client;
mod context;
mod error;

pub use client::{CommentClient, CreatedComment};
pub use context::{ActionsContext, CommentTarget, issue_number_from_event, parse_repository};
pub use error::GithubError;
