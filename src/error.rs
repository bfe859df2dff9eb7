//! Error types for the Wolfy client

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Request construction errors
    #[error("malformed request path {path:?}: {reason}")]
    MalformedPath { path: String, reason: String },

    #[error("failed to encode request payload: {0}")]
    Encoding(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("api request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    // Response errors
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("expected a JSON response, got content type {content_type:?}")]
    UnexpectedContentType { content_type: String },

    #[error("invalid token: authentication check failed: {0}")]
    InvalidSession(#[source] Box<Error>),

    #[error("could not find user '{username}': {source}")]
    UserLookup {
        username: String,
        #[source]
        source: Box<Error>,
    },

    // Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed path error
    pub fn malformed_path(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedPath {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an encoding error
    pub fn encoding(reason: impl ToString) -> Self {
        Self::Encoding(reason.to_string())
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    /// The underlying error with any added context removed.
    ///
    /// A failed construction probe and a failed call later on the same
    /// client report the same root kind.
    pub fn root(&self) -> &Error {
        match self {
            Self::InvalidSession(inner) => inner.root(),
            Self::UserLookup { source, .. } => source.root(),
            other => other,
        }
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self.root() {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
