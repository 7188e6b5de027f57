//! Core types for mergepick

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated actor for this session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Login handle
    pub login: String,
}

/// Owner/name pair addressing a single repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoRef {
    /// Create a new repository reference
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Permission flags GitHub declares inline with repository metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoPermissions {
    /// Full administrative access
    pub admin: bool,
    /// Write access
    pub push: bool,
    /// Read access
    pub pull: bool,
}

impl RepoPermissions {
    /// Whether these permissions allow merging (push or admin)
    pub const fn can_merge(&self) -> bool {
        self.push || self.admin
    }
}

/// Repository visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Only visible to collaborators
    Private,
    /// Visible to everyone
    Public,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Private => write!(f, "Private"),
            Self::Public => write!(f, "Public"),
        }
    }
}

/// A repository as returned by the listing or metadata endpoints
///
/// `permissions` may be absent (not every endpoint returns them) or stale
/// by the time it is consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Owner login
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Full name (`owner/name`)
    pub full_name: String,
    /// Repository visibility
    pub visibility: Visibility,
    /// Declared permissions for the authenticated identity, if returned
    pub permissions: Option<RepoPermissions>,
    /// When the repository was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

impl RepositorySummary {
    /// Owner/name reference for follow-up API calls
    pub fn repo_ref(&self) -> RepoRef {
        RepoRef::new(&self.owner, &self.name)
    }

    /// Label shown in the selection menu
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.full_name, self.visibility)
    }
}

/// How an access decision was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessProvenance {
    /// Declared permissions granted push/admin; no network calls made
    Declared,
    /// Decided by probing the API
    Probed,
}

/// Outcome of qualifying one repository for the current identity
///
/// Never cached: permissions can change between listing and merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    /// Whether the identity may merge into the repository
    pub granted: bool,
    /// How the decision was reached
    pub provenance: AccessProvenance,
    /// Why a probe failed (logging only; every failure means "no access")
    pub reason: Option<String>,
}

impl AccessDecision {
    /// Affirmative decision from declared permissions
    pub const fn declared() -> Self {
        Self {
            granted: true,
            provenance: AccessProvenance::Declared,
            reason: None,
        }
    }

    /// Affirmative decision from a successful probe
    pub const fn probed() -> Self {
        Self {
            granted: true,
            provenance: AccessProvenance::Probed,
            reason: None,
        }
    }

    /// Negative decision from a failed probe
    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            provenance: AccessProvenance::Probed,
            reason: Some(reason.into()),
        }
    }
}

/// PR state (open, closed, merged)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrState {
    /// PR is open and can be merged
    Open,
    /// PR was closed without merging
    Closed,
    /// PR was merged
    Merged,
}

impl std::fmt::Display for PrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Merged => write!(f, "merged"),
        }
    }
}

/// The candidate pull request for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestSummary {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Author login
    pub author: String,
    /// Base branch name
    pub base_ref: String,
    /// Current state
    pub state: PrState,
    /// When the PR was opened
    pub created_at: Option<DateTime<Utc>>,
    /// When the PR was last updated
    pub updated_at: Option<DateTime<Utc>>,
    /// Web URL for the PR
    pub html_url: String,
}

/// Raw result of the merge endpoint
#[derive(Debug, Clone)]
pub struct MergeResult {
    /// Whether the merge was successful
    pub merged: bool,
    /// The SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Message from the merge operation (especially on failure)
    pub message: Option<String>,
}

/// Merge strategy
///
/// Only standard merge commits are supported; squash and rebase are never
/// offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMethod {
    /// Create a merge commit
    Merge,
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
        }
    }
}

/// Guidance category for a refused merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Token scope or repository role is not enough to merge
    InsufficientTokenScope,
    /// GitHub refused because the PR is not mergeable
    Unmergeable,
    /// Anything else
    Unknown,
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientTokenScope => write!(f, "insufficient token scope"),
            Self::Unmergeable => write!(f, "unmergeable"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A failed merge attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeFailure {
    /// Classified category (advisory)
    pub category: FailureCategory,
    /// Raw message from GitHub
    pub message: String,
}

/// Final result of a merge attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The PR was merged
    Merged {
        /// Merge commit SHA, if GitHub returned one
        sha: Option<String>,
    },
    /// The merge endpoint was called and refused or errored
    Failed(MergeFailure),
    /// Re-qualification failed; the merge endpoint was never called
    Denied {
        /// Why access could not be confirmed
        reason: Option<String>,
    },
}
