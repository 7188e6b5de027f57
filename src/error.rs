//! Error types for mergepick

use thiserror::Error;

/// Errors that can occur while running a merge session
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid local configuration (e.g. no token)
    #[error("configuration error: {0}")]
    Config(String),

    /// The token was rejected or the identity could not be resolved
    #[error("authentication error: {0}")]
    Auth(String),

    /// GitHub API returned an error; holds the message GitHub sent back
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Generic platform failure not tied to a specific API response
    #[error("platform error: {0}")]
    Platform(String),

    /// Internal failure (terminal I/O, unexpected state)
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        match err {
            // Keep GitHub's own wording; callers pattern-match on it
            octocrab::Error::GitHub { source, .. } => Self::GitHubApi(source.message),
            other => Self::GitHubApi(other.to_string()),
        }
    }
}

/// Result type alias for mergepick operations
pub type Result<T> = std::result::Result<T, Error>;
