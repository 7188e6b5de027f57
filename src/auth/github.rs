//! GitHub token resolution

use super::AuthSource;
use crate::error::{Error, Result};
use tracing::debug;

/// Environment variable holding the GitHub token
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Resolved GitHub credentials
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Personal access token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Load the GitHub token from the environment, then from `.env`
///
/// Does not touch the network; a missing token is a configuration error.
pub fn get_github_auth() -> Result<GitHubAuthConfig> {
    let env_value = std::env::var(GITHUB_TOKEN_VAR).ok();
    let config = resolve_token(env_value, || {
        dotenvy::dotenv_iter().ok().and_then(|entries| {
            entries
                .filter_map(std::result::Result::ok)
                .find(|(key, _)| key == GITHUB_TOKEN_VAR)
                .map(|(_, value)| value)
        })
    })?;
    debug!(source = %config.source, "resolved GitHub token");
    Ok(config)
}

/// Pick a token from the environment value or the `.env` lookup
///
/// Blank values count as missing. The `.env` lookup only runs when the
/// environment has no usable token.
pub fn resolve_token(
    env_value: Option<String>,
    dotenv_lookup: impl FnOnce() -> Option<String>,
) -> Result<GitHubAuthConfig> {
    let non_blank = |value: String| {
        let trimmed = value.trim().to_string();
        (!trimmed.is_empty()).then_some(trimmed)
    };

    if let Some(token) = env_value.and_then(non_blank) {
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
        });
    }

    dotenv_lookup()
        .and_then(non_blank)
        .map(|token| GitHubAuthConfig {
            token,
            source: AuthSource::DotEnv,
        })
        .ok_or_else(|| {
            Error::Config(format!(
                "{GITHUB_TOKEN_VAR} is not set in your environment or .env file"
            ))
        })
}
