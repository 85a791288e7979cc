use reqwest::StatusCode;
use thiserror::Error;

/// Every way an exchange with the chat endpoint can fail.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Chat endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed chat response: {0}")]
    Decode(String),
}
