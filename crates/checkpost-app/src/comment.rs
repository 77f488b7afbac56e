//! The `comment` use case: post a rendered report to the pull request.

use anyhow::Context;
use checkpost_github::{ActionsContext, CommentClient, CommentTarget, CreatedComment};

/// Explicit target pieces that win over the Actions context.
#[derive(Clone, Debug, Default)]
pub struct TargetOverrides {
    /// `owner/repo`.
    pub repo: Option<String>,
    pub issue_number: Option<u64>,
}

/// Merge overrides over the Actions context into a complete target.
pub fn resolve_target(
    ctx: &ActionsContext,
    overrides: &TargetOverrides,
) -> anyhow::Result<CommentTarget> {
    let (owner, repo) = match overrides.repo.as_deref() {
        Some(full) => checkpost_github::parse_repository(full)?,
        None => (
            ctx.owner.clone().context("repository unknown: set GITHUB_REPOSITORY or --repo")?,
            ctx.repo.clone().context("repository unknown: set GITHUB_REPOSITORY or --repo")?,
        ),
    };

    let issue_number = overrides.issue_number.or(ctx.issue_number).context(
        "issue number unknown: run on a pull_request event or pass --issue-number",
    )?;

    Ok(CommentTarget {
        owner,
        repo,
        issue_number,
    })
}

/// Input for the comment use case.
#[derive(Clone, Debug)]
pub struct CommentInput<'a> {
    /// Finished comment body.
    pub body: &'a str,
    pub target: CommentTarget,
    /// API base URL, e.g. `https://api.github.com`.
    pub api_url: &'a str,
    pub token: &'a str,
}

#[derive(Clone, Debug)]
pub struct CommentOutcome {
    pub target: CommentTarget,
    pub comment: CreatedComment,
}

/// Post the comment. Failures propagate; there is no retry.
pub fn run_comment(input: CommentInput<'_>) -> anyhow::Result<CommentOutcome> {
    let client = CommentClient::new(input.api_url, input.token).context("build github client")?;
    let comment = client
        .create_comment(&input.target, input.body)
        .with_context(|| {
            format!(
                "create comment on {}/{}#{}",
                input.target.owner, input.target.repo, input.target.issue_number
            )
        })?;

    Ok(CommentOutcome {
        target: input.target,
        comment,
    })
}
