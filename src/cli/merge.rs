//! Merge command - pick a repository and merge its latest PR

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::operator::TerminalOperator;
use crate::cli::style::{Stylize, check, cross};
use anstream::println;
use mergepick::error::Result;
use mergepick::merge::guidance;
use mergepick::session::{SessionOutcome, run_session};
use mergepick::types::{FailureCategory, MergeOutcome};
use tracing::debug;

/// Options for the merge command
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// GitHub Enterprise host, `None` for github.com
    pub host: Option<String>,
}

/// Run the merge command
///
/// Returns `Err` only for fatal problems (missing token, authentication,
/// repository listing, prompt I/O). A refused merge is still `Ok`.
#[allow(clippy::future_not_send)]
pub async fn run_merge(options: &MergeOptions) -> Result<SessionOutcome> {
    let ctx = CommandContext::new(options.host.as_deref())?;
    debug!(token_source = %ctx.auth.source, "credentials loaded");
    let outcome = run_session(ctx.service.as_ref(), &TerminalOperator, &CliProgress).await?;

    if let SessionOutcome::Completed(ref merge_outcome) = outcome {
        print_merge_outcome(merge_outcome);
    }

    Ok(outcome)
}

/// Print the result of a merge attempt
fn print_merge_outcome(outcome: &MergeOutcome) {
    match outcome {
        MergeOutcome::Merged { sha } => {
            println!(
                "{} {}",
                check(),
                "Pull request successfully merged!".success()
            );
            if let Some(sha) = sha {
                println!("{} {}", "SHA:".emphasis(), sha.success());
            }
        }
        MergeOutcome::Denied { reason } => {
            println!(
                "{}",
                "Insufficient permissions to merge this pull request".warn()
            );
            if let Some(reason) = reason {
                println!("{}", format!("Reason: {reason}").muted());
            }
        }
        MergeOutcome::Failed(failure) => {
            println!(
                "{} {} {}",
                cross(),
                "Error merging pull request:".error(),
                failure.message
            );

            let steps = guidance(failure.category);
            match failure.category {
                FailureCategory::InsufficientTokenScope => {
                    println!();
                    println!("{}", "Possible solutions:".warn());
                    for (i, step) in steps.iter().enumerate() {
                        println!("{}", format!("{}. {step}", i + 1).warn());
                    }
                }
                FailureCategory::Unmergeable => {
                    println!();
                    println!("{}", "The pull request cannot be merged:".warn());
                    for step in steps {
                        println!("{}", format!("- {step}").warn());
                    }
                }
                FailureCategory::Unknown => {}
            }
        }
    }
}
