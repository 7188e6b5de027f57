//! Shared command context
//!
//! Resolves credentials and builds the GitHub service. Runs before any
//! remote call so a missing token fails fast.

use mergepick::auth::{GitHubAuthConfig, get_github_auth};
use mergepick::error::Result;
use mergepick::platform::{GitHubService, RepositoryService};
use tracing::debug;

/// Everything a command needs to talk to GitHub
pub struct CommandContext {
    /// Resolved credentials
    pub auth: GitHubAuthConfig,
    /// Repository service (GitHub)
    pub service: Box<dyn RepositoryService>,
}

impl CommandContext {
    /// Resolve the token and create the service
    pub fn new(host: Option<&str>) -> Result<Self> {
        let auth = get_github_auth()?;
        debug!(host = host.unwrap_or("github.com"), "creating GitHub service");
        let service = GitHubService::new(&auth.token, host)?;

        Ok(Self {
            auth,
            service: Box::new(service),
        })
    }
}
