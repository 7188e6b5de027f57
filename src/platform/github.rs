//! GitHub repository service implementation

use crate::error::{Error, Result};
use crate::platform::RepositoryService;
use crate::types::{
    Identity, MergeMethod, MergeResult, PrState, PullRequestSummary, RepoPermissions, RepoRef,
    RepositorySummary, Visibility,
};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::debug;

/// Minimal collaborator payload; only the login is needed
#[derive(Deserialize)]
struct Collaborator {
    login: String,
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` selects a GitHub Enterprise instance; `None` means github.com.
    pub fn new(token: &str, host: Option<&str>) -> Result<Self> {
        match host {
            Some(h) => Self::with_base_uri(token, &format!("https://{h}/api/v3")),
            None => {
                let client = Octocrab::builder()
                    .personal_token(token.to_string())
                    .build()
                    .map_err(|e| Error::GitHubApi(e.to_string()))?;
                Ok(Self { client })
            }
        }
    }

    /// Create a service talking to an explicit API base URI
    pub fn with_base_uri(token: &str, base_uri: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(base_uri)
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
        Ok(Self { client })
    }
}

/// Helper to convert an octocrab repository to our `RepositorySummary`
fn repo_from_octocrab(repo: &octocrab::models::Repository) -> RepositorySummary {
    let owner = repo
        .owner
        .as_ref()
        .map(|o| o.login.clone())
        .unwrap_or_default();
    let full_name = repo
        .full_name
        .clone()
        .unwrap_or_else(|| format!("{owner}/{}", repo.name));

    RepositorySummary {
        owner,
        name: repo.name.clone(),
        full_name,
        visibility: if repo.private.unwrap_or(false) {
            Visibility::Private
        } else {
            Visibility::Public
        },
        permissions: repo.permissions.as_ref().map(|p| RepoPermissions {
            admin: p.admin,
            push: p.push,
            pull: p.pull,
        }),
        updated_at: repo.updated_at,
    }
}

/// Helper to convert an octocrab PR to our `PullRequestSummary`
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequestSummary {
    let state = match pr.state {
        Some(octocrab::models::IssueState::Open) => PrState::Open,
        Some(octocrab::models::IssueState::Closed) if pr.merged_at.is_some() => PrState::Merged,
        // IssueState is non-exhaustive, so use wildcard for Closed and any future variants
        Some(_) | None => PrState::Closed,
    };

    PullRequestSummary {
        number: pr.number,
        title: pr.title.as_deref().unwrap_or_default().to_string(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_default(),
        base_ref: pr.base.ref_field.clone(),
        state,
        created_at: pr.created_at,
        updated_at: pr.updated_at,
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
    }
}

#[async_trait]
impl RepositoryService for GitHubService {
    async fn authenticated_user(&self) -> Result<Identity> {
        debug!("resolving authenticated user");
        let user = self
            .client
            .current()
            .user()
            .await
            .map_err(|e| match Error::from(e) {
                Error::GitHubApi(message) => Error::Auth(message),
                other => other,
            })?;
        debug!(login = %user.login, "authenticated");
        Ok(Identity { login: user.login })
    }

    async fn list_private_repositories(&self, per_page: u8) -> Result<Vec<RepositorySummary>> {
        debug!(per_page, "listing private repositories");
        let page = self
            .client
            .current()
            .list_repos_for_authenticated_user()
            .visibility("private")
            .sort("updated")
            .per_page(per_page)
            .send()
            .await?;

        let result: Vec<RepositorySummary> = page.items.iter().map(repo_from_octocrab).collect();
        debug!(count = result.len(), "listed private repositories");
        Ok(result)
    }

    async fn get_repository(&self, repo: &RepoRef) -> Result<RepositorySummary> {
        debug!(%repo, "getting repository");
        let data = self.client.repos(&repo.owner, &repo.name).get().await?;
        let result = repo_from_octocrab(&data);
        debug!(%repo, permissions = ?result.permissions, "got repository");
        Ok(result)
    }

    async fn list_collaborators(&self, repo: &RepoRef, per_page: u8) -> Result<Vec<String>> {
        debug!(%repo, per_page, "listing collaborators");
        let route = format!("/repos/{}/{}/collaborators", repo.owner, repo.name);
        let collaborators: Vec<Collaborator> = self
            .client
            .get(route, Some(&[("per_page", per_page)]))
            .await?;

        debug!(%repo, count = collaborators.len(), "listed collaborators");
        Ok(collaborators.into_iter().map(|c| c.login).collect())
    }

    async fn list_open_pull_requests(
        &self,
        repo: &RepoRef,
        per_page: u8,
    ) -> Result<Vec<PullRequestSummary>> {
        debug!(%repo, per_page, "listing open PRs");
        let prs = self
            .client
            .pulls(&repo.owner, &repo.name)
            .list()
            .state(octocrab::params::State::Open)
            .sort(octocrab::params::pulls::Sort::Updated)
            .direction(octocrab::params::Direction::Descending)
            .per_page(per_page)
            .send()
            .await?;

        let result: Vec<PullRequestSummary> = prs.items.iter().map(pr_from_octocrab).collect();
        debug!(%repo, count = result.len(), "listed open PRs");
        Ok(result)
    }

    async fn merge_pr(
        &self,
        repo: &RepoRef,
        pr_number: u64,
        method: MergeMethod,
    ) -> Result<MergeResult> {
        debug!(%repo, pr_number, %method, "merging PR");

        let octocrab_method = match method {
            MergeMethod::Merge => octocrab::params::pulls::MergeMethod::Merge,
        };

        let result = self
            .client
            .pulls(&repo.owner, &repo.name)
            .merge(pr_number)
            .method(octocrab_method)
            .send()
            .await?;

        let merge_result = MergeResult {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            pr_number,
            merged = merge_result.merged,
            sha = ?merge_result.sha,
            "merge complete"
        );
        Ok(merge_result)
    }
}
