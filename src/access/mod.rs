//! Access qualification
//!
//! Decides whether the authenticated identity may merge into a repository.
//! Declared permissions are trusted when they grant push or admin; anything
//! else falls back to a live probe. Any probe failure (not found, forbidden,
//! rate limited, network) is folded into "no access".

use crate::error::Result;
use crate::platform::RepositoryService;
use crate::types::{AccessDecision, Identity, RepoRef, RepositorySummary};
use async_trait::async_trait;
use tracing::{debug, info};

/// Page size for the collaborator probe; one entry is enough to prove access
pub const PROBE_PAGE_SIZE: u8 = 1;

/// Strategy for verifying write access without declared permissions
#[async_trait]
pub trait AccessProbe: Send + Sync {
    /// Succeed only if the identity can write to `repo`
    async fn probe_write_access(&self, repo: &RepoRef) -> Result<()>;
}

/// Probe that fetches the repository and then lists its collaborators
///
/// Listing collaborators requires push access, so a successful listing
/// implies the identity can merge.
pub struct CollaboratorProbe<'a> {
    service: &'a dyn RepositoryService,
}

impl<'a> CollaboratorProbe<'a> {
    /// Create a probe backed by `service`
    pub fn new(service: &'a dyn RepositoryService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AccessProbe for CollaboratorProbe<'_> {
    async fn probe_write_access(&self, repo: &RepoRef) -> Result<()> {
        self.service.get_repository(repo).await?;
        self.service
            .list_collaborators(repo, PROBE_PAGE_SIZE)
            .await?;
        Ok(())
    }
}

/// Qualify `repository` for `identity`
///
/// Never fails: an undecidable state resolves to a negative decision.
/// Issues no network calls when declared permissions already grant access.
pub async fn qualify(
    identity: &Identity,
    repository: &RepositorySummary,
    probe: &dyn AccessProbe,
) -> AccessDecision {
    if repository.permissions.is_some_and(|p| p.can_merge()) {
        debug!(login = %identity.login, repo = %repository.full_name, "declared access");
        return AccessDecision::declared();
    }

    let decision = match probe.probe_write_access(&repository.repo_ref()).await {
        Ok(()) => AccessDecision::probed(),
        Err(e) => AccessDecision::denied(e.to_string()),
    };

    info!(
        login = %identity.login,
        repo = %repository.full_name,
        granted = decision.granted,
        reason = decision.reason.as_deref().unwrap_or_default(),
        "probed access"
    );
    decision
}
