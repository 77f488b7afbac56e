//! Execution context: which repository and issue/PR the comment goes to.

use checkpost_types::ids;
use serde_json::Value;
use std::path::Path;

use crate::GithubError;

/// Where a comment is posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentTarget {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
}

/// What a GitHub Actions run tells us about itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionsContext {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub issue_number: Option<u64>,
    pub api_url: String,
}

impl ActionsContext {
    /// Build the context from Actions environment variables.
    ///
    /// `GITHUB_EVENT_PATH` is read and parsed when set. An unreadable file is
    /// logged and leaves the issue number unknown; a malformed payload is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GithubError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (owner, repo) = match lookup(ids::ENV_GITHUB_REPOSITORY).filter(|s| !s.is_empty()) {
            Some(full) => {
                let (owner, repo) = parse_repository(&full)?;
                (Some(owner), Some(repo))
            }
            None => (None, None),
        };

        let issue_number = match lookup(ids::ENV_GITHUB_EVENT_PATH).filter(|s| !s.is_empty()) {
            Some(path) => read_event(Path::new(&path))?.as_ref().and_then(issue_number_from_event),
            None => None,
        };

        let api_url = lookup(ids::ENV_GITHUB_API_URL)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| ids::DEFAULT_GITHUB_API_URL.to_string());

        tracing::debug!(?owner, ?repo, ?issue_number, %api_url, "resolved actions context");

        Ok(Self {
            owner,
            repo,
            issue_number,
            api_url,
        })
    }
}

fn read_event(path: &Path) -> Result<Option<Value>, GithubError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "event payload not readable");
            return Ok(None);
        }
    };
    serde_json::from_str(&text).map(Some).map_err(|source| GithubError::EventJson {
        path: path.display().to_string(),
        source,
    })
}

/// Split `owner/repo`.
pub fn parse_repository(full: &str) -> Result<(String, String), GithubError> {
    let invalid = || GithubError::InvalidRepository(full.to_string());
    let (owner, repo) = full.trim().split_once('/').ok_or_else(invalid)?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(invalid());
    }
    Ok((owner.to_string(), repo.to_string()))
}

/// Issue or pull request number from a webhook event payload.
///
/// Looks at `issue.number`, then `pull_request.number`, then top-level `number`.
pub fn issue_number_from_event(event: &Value) -> Option<u64> {
    event
        .pointer("/issue/number")
        .or_else(|| event.pointer("/pull_request/number"))
        .or_else(|| event.get("number"))
        .and_then(Value::as_u64)
}
