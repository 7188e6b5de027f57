//! Merge failure classification
//!
//! Purely advisory: the outcome is a failure whatever the category.

use crate::types::FailureCategory;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_SCOPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)resource not accessible by (personal access token|integration)|must have (admin|push|write) (rights|access)|\bpermissions? (denied|required)\b",
    )
    .expect("token scope pattern is valid")
});

static NOT_MERGEABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)not mergeable").expect("mergeable pattern is valid"));

/// Classify a raw merge failure message
pub fn classify_merge_failure(message: &str) -> FailureCategory {
    // An explicit "not mergeable" outranks any permission wording
    if NOT_MERGEABLE.is_match(message) {
        FailureCategory::Unmergeable
    } else if TOKEN_SCOPE.is_match(message) {
        FailureCategory::InsufficientTokenScope
    } else {
        FailureCategory::Unknown
    }
}

/// Suggested next steps for a failure category
pub const fn guidance(category: FailureCategory) -> &'static [&'static str] {
    match category {
        FailureCategory::InsufficientTokenScope => &[
            "Check that your GitHub token has \"repo\" scope permissions",
            "Verify you have write/admin access to this repository",
            "Check if branch protection rules are blocking the merge",
            "Ensure the PR meets all repository requirements (reviews, status checks, etc.)",
        ],
        FailureCategory::Unmergeable => &[
            "There might be merge conflicts",
            "Required status checks may be failing",
            "Required reviews may be missing",
        ],
        FailureCategory::Unknown => &[],
    }
}
