//! Blocking client for the issue comments endpoint.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::{CommentTarget, GithubError};

const API_VERSION: &str = "2022-11-28";

/// A comment as returned by the create endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedComment {
    pub id: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

pub struct CommentClient {
    http: Client,
    api_base: String,
}

impl CommentClient {
    /// Build a client for `api_base` (e.g. `https://api.github.com`).
    ///
    /// An empty token sends no `Authorization` header.
    pub fn new(api_base: &str, token: &str) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("checkpost"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let token = token.trim();
        if !token.is_empty() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| GithubError::InvalidToken)?;
            headers.insert(AUTHORIZATION, value);
        }

        // No total timeout; the blocking default would be 30s.
        let http = Client::builder()
            .default_headers(headers)
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn comments_url(&self, target: &CommentTarget) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_base, target.owner, target.repo, target.issue_number
        )
    }

    /// Create a comment on the issue or pull request. Single attempt, no retry.
    pub fn create_comment(
        &self,
        target: &CommentTarget,
        body: &str,
    ) -> Result<CreatedComment, GithubError> {
        let url = self.comments_url(target);
        tracing::debug!(%url, bytes = body.len(), "creating issue comment");

        let response = self.http.post(&url).json(&json!({ "body": body })).send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(text);
            tracing::warn!(status = status.as_u16(), %message, "comment creation rejected");
            return Err(GithubError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let created: CreatedComment = response.json()?;
        tracing::info!(id = created.id, url = ?created.html_url, "created issue comment");
        Ok(created)
    }
}
