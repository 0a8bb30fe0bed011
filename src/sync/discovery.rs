//! Repository discovery
//!
//! A repository is any directory holding a `.git` entry. Only the workspace
//! root and its direct children are inspected; repositories nested deeper are
//! not discovered.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Marker entry identifying a git repository (directory or worktree file)
pub const GIT_MARKER: &str = ".git";

/// Return the root (if it is a repository) and every non-hidden child
/// directory that is a repository, sorted by path
pub fn discover_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    let mut repos = Vec::new();
    if is_repository(root) {
        tracing::debug!("Workspace root is itself a repository");
        repos.push(root.to_path_buf());
    }

    let entries = std::fs::read_dir(root)
        .with_context(|| format!("Failed to read workspace root: {}", root.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", root.display()))?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            tracing::trace!("Skipping hidden directory {}", path.display());
            continue;
        }
        if is_repository(&path) {
            repos.push(path);
        }
    }

    repos.sort();
    Ok(repos)
}

/// Check whether `dir` contains a `.git` entry of any kind
pub fn is_repository(dir: &Path) -> bool {
    dir.join(GIT_MARKER).exists()
}
