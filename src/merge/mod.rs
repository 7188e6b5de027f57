//! Merge workflow for a single repository
//!
//! 1. Locate - find the latest open PR (read, failures degrade to none)
//! 2. Execute - re-qualify, then merge (write, failures are surfaced)
//! 3. Classify - turn GitHub's refusal text into operator guidance

mod classify;
mod execute;
mod locate;

pub use classify::{classify_merge_failure, guidance};
pub use execute::{MERGE_METHOD, MergeTarget, attempt_merge};
pub use locate::{PR_PAGE_SIZE, find_latest_open_pr};
