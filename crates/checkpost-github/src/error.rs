use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("invalid repository '{0}' (expected owner/repo)")]
    InvalidRepository(String),

    #[error("parse event payload {path}: {source}")]
    EventJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid authorization token")]
    InvalidToken,

    #[error("github api request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("github api returned {status}: {message}")]
    Status { status: u16, message: String },
}
