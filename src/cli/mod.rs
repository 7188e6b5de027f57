//! CLI layer: prompts, progress rendering and the merge command

pub mod context;
pub mod merge;
pub mod operator;
pub mod style;

use anstream::{eprintln, println};
use async_trait::async_trait;
use mergepick::progress::ProgressCallback;
use style::Stylize;

/// Progress callback that prints to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_message(&self, message: &str) {
        println!("{}", message.info());
    }

    async fn on_skip(&self, message: &str) {
        println!("{}", message.muted());
    }

    async fn on_warning(&self, message: &str) {
        println!("{}", message.warn());
    }

    async fn on_error(&self, message: &str) {
        eprintln!("{}", message.error());
    }
}
