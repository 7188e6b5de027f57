//! Remote repository service
//!
//! Abstracts the handful of GitHub operations the merge workflow relies on,
//! so the policy code can be exercised against a mock.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{
    Identity, MergeMethod, MergeResult, PullRequestSummary, RepoRef, RepositorySummary,
};
use async_trait::async_trait;

/// Page size used when listing the identity's repositories (GitHub maximum)
pub const REPOSITORY_PAGE_SIZE: u8 = 100;

/// Remote repository service trait
///
/// Every method is a single remote call that may fail with transport,
/// authorization or domain errors. Implementations must not retry.
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Resolve the identity behind the configured token
    async fn authenticated_user(&self) -> Result<Identity>;

    /// List private repositories of the authenticated identity,
    /// most recently updated first
    async fn list_private_repositories(&self, per_page: u8) -> Result<Vec<RepositorySummary>>;

    /// Fetch repository metadata, including declared permissions if returned
    async fn get_repository(&self, repo: &RepoRef) -> Result<RepositorySummary>;

    /// List collaborator logins
    ///
    /// GitHub only answers this for callers with push access, which makes
    /// it usable as a privilege probe.
    async fn list_collaborators(&self, repo: &RepoRef, per_page: u8) -> Result<Vec<String>>;

    /// List open PRs sorted by last update, newest first
    async fn list_open_pull_requests(
        &self,
        repo: &RepoRef,
        per_page: u8,
    ) -> Result<Vec<PullRequestSummary>>;

    /// Merge a PR with the specified method
    async fn merge_pr(
        &self,
        repo: &RepoRef,
        pr_number: u64,
        method: MergeMethod,
    ) -> Result<MergeResult>;
}
