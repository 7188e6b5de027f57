//! Authentication for GitHub
//!
//! Supports the process environment and a `.env` file in the working
//! directory.

mod github;

pub use github::{GITHUB_TOKEN_VAR, GitHubAuthConfig, get_github_auth, resolve_token};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from environment variable
    EnvVar,
    /// Token from a `.env` file
    DotEnv,
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar => write!(f, "environment"),
            Self::DotEnv => write!(f, ".env file"),
        }
    }
}
