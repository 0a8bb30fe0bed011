//! Workspace-wide `.gitignore` synchronization
//!
//! A run loads the canonical template, discovers every repository directly
//! under the workspace root, and brings each repository's `.gitignore` in line
//! with the template. Outcomes are collected into a [`SyncResult`].

pub mod discovery;
pub mod manager;
pub mod report;
pub mod template;

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::SyncConfig;

pub use discovery::discover_repositories;
pub use manager::{sync_all, sync_repository};
pub use template::Template;

/// Name of the file kept in sync inside every repository
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Classification of a single repository after comparing it to the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncOutcome {
    /// No `.gitignore` existed
    Created,
    /// A `.gitignore` existed with different content
    Updated,
    /// The `.gitignore` already matched the template
    Unchanged,
}

/// Repositories partitioned by outcome, each bucket in traversal order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    pub created: Vec<PathBuf>,
    pub updated: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub dry_run: bool,
}

impl SyncResult {
    /// Create an empty result for a run with the given dry-run setting
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// File a repository under the bucket matching its outcome
    pub fn record(&mut self, repo: PathBuf, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Created => self.created.push(repo),
            SyncOutcome::Updated => self.updated.push(repo),
            SyncOutcome::Unchanged => self.unchanged.push(repo),
        }
    }

    /// True when no repository needed a write
    pub fn is_clean(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty()
    }

    /// Number of repositories that were (or would be) written
    pub fn changed_count(&self) -> usize {
        self.created.len() + self.updated.len()
    }

    /// Number of repositories seen in this run
    pub fn total(&self) -> usize {
        self.changed_count() + self.unchanged.len()
    }
}

/// Execute a full run with the given settings
///
/// The template is loaded before discovery so that a bad template path
/// aborts the run without touching any repository.
pub fn run(config: &SyncConfig) -> Result<SyncResult> {
    let template = Template::load(&config.template)?;
    tracing::info!(
        "Loaded template {} ({} bytes)",
        template.source().display(),
        template.content().len()
    );

    let repos = discover_repositories(&config.root)?;
    tracing::info!(
        "Discovered {} repositories under {}",
        repos.len(),
        config.root.display()
    );

    let result = sync_all(repos, template.content(), config.dry_run)?;
    tracing::info!(
        "Sync finished: {} created, {} updated, {} unchanged",
        result.created.len(),
        result.updated.len(),
        result.unchanged.len()
    );

    Ok(result)
}
