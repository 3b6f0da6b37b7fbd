//! Error Types

use dom_snapshot::SnapshotError;

/// Description generation failures; all are recovered by leaving the
/// description untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    #[error("place name is empty")]
    MissingName,
    #[error("request failed: {0}")]
    Http(String),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("response had no text content")]
    EmptyContent,
}

impl From<reqwest::Error> for GenerateError {
    fn from(e: reqwest::Error) -> Self {
        GenerateError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(e: serde_json::Error) -> Self {
        GenerateError::Malformed(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("image tool is not loaded yet")]
    NotReady,
    #[error(transparent)]
    Capture(#[from] SnapshotError),
}
