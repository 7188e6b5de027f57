//! Shared test fixtures

#![allow(dead_code, unused_imports)]


pub use mock_service::{MergePrCall, MockRepositoryService};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mergepick::access::AccessProbe;
use mergepick::error::{Error, Result};
use mergepick::progress::ProgressCallback;
use mergepick::select::AccessibleRepository;
use mergepick::session::Operator;
use mergepick::types::{
    Identity, PrState, PullRequestSummary, RepoPermissions, RepoRef, RepositorySummary,
    Visibility,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed timestamp on 2024-01-01 at `hour`:00 UTC
pub fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
}

pub fn identity() -> Identity {
    Identity {
        login: "octo".to_string(),
    }
}

pub const fn push_only() -> RepoPermissions {
    RepoPermissions {
        admin: false,
        push: true,
        pull: true,
    }
}

pub const fn admin_only() -> RepoPermissions {
    RepoPermissions {
        admin: true,
        push: false,
        pull: true,
    }
}

pub const fn read_only() -> RepoPermissions {
    RepoPermissions {
        admin: false,
        push: false,
        pull: true,
    }
}

/// Private repository fixture
pub fn make_repo(full_name: &str, permissions: Option<RepoPermissions>) -> RepositorySummary {
    let (owner, name) = full_name.split_once('/').expect("owner/name");
    RepositorySummary {
        owner: owner.to_string(),
        name: name.to_string(),
        full_name: full_name.to_string(),
        visibility: Visibility::Private,
        permissions,
        updated_at: Some(at_hour(0)),
    }
}

pub fn repo_ref(full_name: &str) -> RepoRef {
    let (owner, name) = full_name.split_once('/').expect("owner/name");
    RepoRef::new(owner, name)
}

/// PR fixture
pub fn make_pr(number: u64, title: &str, state: PrState, updated_hour: u32) -> PullRequestSummary {
    PullRequestSummary {
        number,
        title: title.to_string(),
        author: "contributor".to_string(),
        base_ref: "main".to_string(),
        state,
        created_at: Some(at_hour(0)),
        updated_at: Some(at_hour(updated_hour)),
        html_url: format!("https://github.com/acme/widgets/pull/{number}"),
    }
}

/// Probe with a fixed answer that counts its invocations
pub struct FixedProbe {
    error: Option<String>,
    calls: AtomicUsize,
}

impl FixedProbe {
    pub fn granting() -> Self {
        Self {
            error: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccessProbe for FixedProbe {
    async fn probe_write_access(&self, _repo: &RepoRef) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(msg) => Err(Error::GitHubApi(msg.clone())),
            None => Ok(()),
        }
    }
}

/// Severity of a recorded progress message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Message,
    Skip,
    Warning,
    Error,
}

/// Progress callback that records everything it is told
#[derive(Default)]
pub struct RecordingProgress {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingProgress {
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    pub fn count(&self, level: Level) -> usize {
        self.entries().iter().filter(|(l, _)| *l == level).count()
    }

    fn record(&self, level: Level, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_message(&self, message: &str) {
        self.record(Level::Message, message);
    }

    async fn on_skip(&self, message: &str) {
        self.record(Level::Skip, message);
    }

    async fn on_warning(&self, message: &str) {
        self.record(Level::Warning, message);
    }

    async fn on_error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

/// Operator with scripted answers
pub struct ScriptedOperator {
    choice: Option<usize>,
    confirm: bool,
    offered: Mutex<Vec<Vec<String>>>,
    confirm_calls: Mutex<Vec<u64>>,
}

impl ScriptedOperator {
    /// Pick `choice` and answer the confirmation with `confirm`
    pub fn new(choice: Option<usize>, confirm: bool) -> Self {
        Self {
            choice,
            confirm,
            offered: Mutex::new(Vec::new()),
            confirm_calls: Mutex::new(Vec::new()),
        }
    }

    /// Labels offered in each selection prompt
    pub fn offered(&self) -> Vec<Vec<String>> {
        self.offered.lock().unwrap().clone()
    }

    /// PR numbers the operator was asked to confirm
    pub fn confirm_calls(&self) -> Vec<u64> {
        self.confirm_calls.lock().unwrap().clone()
    }
}

impl Operator for ScriptedOperator {
    fn choose_repository(&self, choices: &[AccessibleRepository]) -> Result<Option<usize>> {
        self.offered
            .lock()
            .unwrap()
            .push(choices.iter().map(|c| c.label.clone()).collect());
        Ok(self.choice)
    }

    fn confirm_merge(&self, pr: &PullRequestSummary) -> Result<bool> {
        self.confirm_calls.lock().unwrap().push(pr.number);
        Ok(self.confirm)
    }
}
