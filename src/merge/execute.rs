//! Merge execution - effectful operations
//!
//! Authorization is verified again right before the merge call. The first
//! check happened when the repository list was built, and the operator may
//! have taken arbitrarily long since then.

use crate::access::{AccessProbe, qualify};
use crate::merge::classify::classify_merge_failure;
use crate::platform::RepositoryService;
use crate::progress::ProgressCallback;
use crate::types::{Identity, MergeFailure, MergeMethod, MergeOutcome, RepoRef};
use tracing::{debug, info, warn};

/// Merge strategy used for every merge: a standard merge commit
pub const MERGE_METHOD: MergeMethod = MergeMethod::Merge;

/// The PR a merge attempt is aimed at
#[derive(Debug, Clone)]
pub struct MergeTarget {
    /// Repository holding the PR
    pub repo: RepoRef,
    /// PR number
    pub pr_number: u64,
    /// PR title (for display)
    pub title: String,
}

/// Re-qualify and, only if access is confirmed, merge the PR (EFFECTFUL)
///
/// Never calls the merge endpoint after a negative decision. Merge errors
/// become `MergeOutcome::Failed` with a classified category instead of
/// being propagated.
pub async fn attempt_merge(
    service: &dyn RepositoryService,
    probe: &dyn AccessProbe,
    identity: &Identity,
    target: &MergeTarget,
    progress: &dyn ProgressCallback,
) -> MergeOutcome {
    let repository = match service.get_repository(&target.repo).await {
        Ok(repository) => repository,
        Err(e) => {
            warn!(repo = %target.repo, error = %e, "could not refresh repository before merge");
            progress
                .on_warning("Unable to verify merge permissions")
                .await;
            return MergeOutcome::Denied {
                reason: Some(e.to_string()),
            };
        }
    };

    let decision = qualify(identity, &repository, probe).await;
    if !decision.granted {
        info!(repo = %target.repo, "merge refused locally: no write access");
        return MergeOutcome::Denied {
            reason: decision.reason,
        };
    }

    progress
        .on_message(&format!(
            "Merging PR #{}: {}...",
            target.pr_number, target.title
        ))
        .await;

    match service
        .merge_pr(&target.repo, target.pr_number, MERGE_METHOD)
        .await
    {
        Ok(result) if result.merged => {
            debug!(pr_number = target.pr_number, sha = ?result.sha, "merged");
            MergeOutcome::Merged { sha: result.sha }
        }
        Ok(result) => {
            // Merge API returned but didn't merge
            let message = result
                .message
                .unwrap_or_else(|| "merge was not performed".to_string());
            MergeOutcome::Failed(MergeFailure {
                category: classify_merge_failure(&message),
                message,
            })
        }
        Err(e) => {
            let message = e.to_string();
            warn!(pr_number = target.pr_number, error = %message, "merge failed");
            MergeOutcome::Failed(MergeFailure {
                category: classify_merge_failure(&message),
                message,
            })
        }
    }
}
