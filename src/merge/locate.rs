//! Pull request lookup

use crate::platform::RepositoryService;
use crate::progress::ProgressCallback;
use crate::types::{PrState, PullRequestSummary, RepoRef};
use tracing::{debug, warn};

/// Only the most recently updated PR is needed
pub const PR_PAGE_SIZE: u8 = 1;

/// Find the most recently updated open PR, if any
///
/// A lookup failure is reported and treated as "no PR" so the session can
/// end gracefully; it is logged as a warning, unlike the empty case.
pub async fn find_latest_open_pr(
    service: &dyn RepositoryService,
    repo: &RepoRef,
    progress: &dyn ProgressCallback,
) -> Option<PullRequestSummary> {
    progress
        .on_message(&format!("Fetching latest PR for {repo}..."))
        .await;

    let prs = match service.list_open_pull_requests(repo, PR_PAGE_SIZE).await {
        Ok(prs) => prs,
        Err(e) => {
            warn!(%repo, error = %e, "failed to list pull requests");
            progress
                .on_error(&format!("Error fetching pull requests: {e}"))
                .await;
            return None;
        }
    };

    let latest = latest_open(prs);
    if latest.is_none() {
        debug!(%repo, "no open PRs");
        progress
            .on_message("No open pull requests found for this repository.")
            .await;
    }
    latest
}

/// Pick the open PR with the newest update; the earliest entry wins ties
fn latest_open(prs: Vec<PullRequestSummary>) -> Option<PullRequestSummary> {
    prs.into_iter()
        .filter(|pr| pr.state == PrState::Open)
        .fold(None, |best: Option<PullRequestSummary>, pr| match best {
            Some(current) if current.updated_at >= pr.updated_at => Some(current),
            _ => Some(pr),
        })
}
