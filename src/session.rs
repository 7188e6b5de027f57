//! One interactive session: authenticate, pick, locate, confirm, merge

use crate::access::{CollaboratorProbe, qualify};
use crate::error::{Error, Result};
use crate::merge::{MergeTarget, attempt_merge, find_latest_open_pr};
use crate::platform::{REPOSITORY_PAGE_SIZE, RepositoryService};
use crate::progress::ProgressCallback;
use crate::select::{AccessibleRepository, select_accessible};
use crate::types::{MergeOutcome, PullRequestSummary};
use tracing::warn;

/// Operator interaction
///
/// Both prompts block until the operator answers.
pub trait Operator: Send + Sync {
    /// Pick one of `choices`; `None` means the operator backed out
    fn choose_repository(&self, choices: &[AccessibleRepository]) -> Result<Option<usize>>;

    /// Show the PR and ask whether to merge it
    fn confirm_merge(&self, pr: &PullRequestSummary) -> Result<bool>;
}

/// How a session ended
///
/// Every variant is a normal end of session; fatal problems are `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The identity has no private repositories
    NoRepositories,
    /// None of the private repositories qualified
    NoAccessibleRepositories,
    /// The operator backed out of the repository menu
    SelectionAborted,
    /// The chosen repository has no open PR (or it could not be fetched)
    NoOpenPullRequest,
    /// The operator declined the merge
    Cancelled,
    /// A merge was attempted
    Completed(MergeOutcome),
}

/// Run a full session against `service`
///
/// Authentication and repository listing failures are fatal and returned
/// as errors. Everything after that degrades to a `SessionOutcome`.
pub async fn run_session(
    service: &dyn RepositoryService,
    operator: &dyn Operator,
    progress: &dyn ProgressCallback,
) -> Result<SessionOutcome> {
    let identity = service.authenticated_user().await?;
    progress
        .on_message(&format!("Authenticated as {}", identity.login))
        .await;

    progress.on_message("Fetching repositories...").await;
    let repositories = service
        .list_private_repositories(REPOSITORY_PAGE_SIZE)
        .await
        .map_err(|e| Error::Platform(format!("Error fetching repositories: {e}")))?;

    if repositories.is_empty() {
        progress.on_warning("No private repositories found.").await;
        return Ok(SessionOutcome::NoRepositories);
    }

    progress
        .on_message(&format!(
            "Found {} private repositories.",
            repositories.len()
        ))
        .await;
    progress
        .on_message("Filtering repositories with sufficient permissions...")
        .await;

    let probe = CollaboratorProbe::new(service);
    let accessible = select_accessible(&identity, &repositories, &probe, progress).await;

    if accessible.is_empty() {
        progress
            .on_warning(
                "No private repositories found with sufficient permissions (push/admin access required).",
            )
            .await;
        return Ok(SessionOutcome::NoAccessibleRepositories);
    }

    progress
        .on_message(&format!(
            "Found {} accessible private repositories out of {} total private repositories.",
            accessible.len(),
            repositories.len()
        ))
        .await;

    let Some(index) = operator.choose_repository(&accessible)? else {
        return Ok(SessionOutcome::SelectionAborted);
    };
    let selected = accessible
        .get(index)
        .ok_or_else(|| Error::Internal(format!("selection {index} out of range")))?;
    let repo = selected.repository.repo_ref();

    let Some(pr) = find_latest_open_pr(service, &repo, progress).await else {
        return Ok(SessionOutcome::NoOpenPullRequest);
    };

    // Early heads-up only; attempt_merge re-checks before mutating
    match service.get_repository(&repo).await {
        Ok(fresh) => {
            if !qualify(&identity, &fresh, &probe).await.granted {
                progress
                    .on_warning(
                        "Limited repository permissions detected; you may not be able to merge pull requests in this repository",
                    )
                    .await;
            }
        }
        Err(e) => {
            warn!(%repo, error = %e, "preflight permission check failed");
            progress
                .on_warning("Unable to verify merge permissions")
                .await;
            progress.on_warning(&format!("Reason: {e}")).await;
        }
    }

    if !operator.confirm_merge(&pr)? {
        progress.on_warning("Merge cancelled.").await;
        return Ok(SessionOutcome::Cancelled);
    }

    let target = MergeTarget {
        repo,
        pr_number: pr.number,
        title: pr.title.clone(),
    };
    let outcome = attempt_merge(service, &probe, &identity, &target, progress).await;
    Ok(SessionOutcome::Completed(outcome))
}
