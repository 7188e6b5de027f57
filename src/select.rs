//! Repository selection - keeps only repositories the identity can merge into

use crate::access::{AccessProbe, qualify};
use crate::progress::ProgressCallback;
use crate::types::{Identity, RepositorySummary};

/// A repository that qualified at listing time, with its menu label
#[derive(Debug, Clone)]
pub struct AccessibleRepository {
    /// The qualified repository
    pub repository: RepositorySummary,
    /// Human label: full name plus visibility
    pub label: String,
}

/// Qualify each repository in order and keep the accessible ones
///
/// Runs strictly one repository at a time so output order matches input
/// order. Qualifying here does not guarantee a later merge will be
/// allowed; the merge step checks again.
pub async fn select_accessible(
    identity: &Identity,
    repositories: &[RepositorySummary],
    probe: &dyn AccessProbe,
    progress: &dyn ProgressCallback,
) -> Vec<AccessibleRepository> {
    let mut accessible = Vec::new();

    for repository in repositories {
        let decision = qualify(identity, repository, probe).await;

        if decision.granted {
            accessible.push(AccessibleRepository {
                label: repository.display_label(),
                repository: repository.clone(),
            });
        } else {
            progress
                .on_skip(&format!(
                    "Skipping {} - insufficient permissions",
                    repository.full_name
                ))
                .await;
        }
    }

    accessible
}
