//! Terminal prompts backed by dialoguer

use crate::cli::style::Stylize;
use anstream::println;
use chrono::{DateTime, Local, Utc};
use dialoguer::{Confirm, Select};
use mergepick::error::{Error, Result};
use mergepick::select::AccessibleRepository;
use mergepick::session::Operator;
use mergepick::types::PullRequestSummary;
use supports_hyperlinks::Stream;
use terminal_link::Link;

/// Rows visible in the repository menu before it scrolls
const MENU_PAGE_SIZE: usize = 15;

/// Operator answering through interactive terminal prompts
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOperator;

impl Operator for TerminalOperator {
    fn choose_repository(&self, choices: &[AccessibleRepository]) -> Result<Option<usize>> {
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();

        Select::new()
            .with_prompt("Select a repository")
            .items(&labels)
            .default(0)
            .max_length(MENU_PAGE_SIZE)
            .interact_opt()
            .map_err(|e| Error::Internal(format!("Failed to read selection: {e}")))
    }

    fn confirm_merge(&self, pr: &PullRequestSummary) -> Result<bool> {
        print_pr_details(pr);

        Confirm::new()
            .with_prompt(format!(
                "Do you want to merge PR #{} into {}?",
                pr.number, pr.base_ref
            ))
            .default(false)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))
    }
}

/// Print the PR detail block shown before confirmation
fn print_pr_details(pr: &PullRequestSummary) {
    println!();
    println!("{}", "Latest Pull Request:".accent());
    println!("{} {}", "Title:".accent(), pr.title);
    println!("{} #{}", "Number:".accent(), pr.number);
    println!("{} {}", "Created by:".accent(), pr.author);
    println!("{} {}", "URL:".accent(), pr_link(pr));
    println!("{} {}", "Created at:".accent(), local_time(pr.created_at));
    println!("{} {}", "Updated at:".accent(), local_time(pr.updated_at));
}

/// Clickable URL where the terminal supports it
fn pr_link(pr: &PullRequestSummary) -> String {
    if supports_hyperlinks::on(Stream::Stdout) {
        Link::new(&pr.html_url, &pr.html_url).to_string()
    } else {
        pr.html_url.clone()
    }
}

fn local_time(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(
        || "unknown".to_string(),
        |t| {
            t.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}
