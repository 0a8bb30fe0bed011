//! Per-repository synchronization
//!
//! Comparison is exact whole-file byte equality. A mismatch means the file is
//! replaced by the template; contents are never merged.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{GITIGNORE_FILE, SyncOutcome, SyncResult};

/// Bring one repository's `.gitignore` in line with `template`
///
/// In dry-run mode the outcome is computed the same way but nothing is
/// written. At most one write happens per call.
pub fn sync_repository(repo: &Path, template: &str, dry_run: bool) -> Result<SyncOutcome> {
    let target = repo.join(GITIGNORE_FILE);

    let outcome = match std::fs::read(&target) {
        Ok(current) if current == template.as_bytes() => SyncOutcome::Unchanged,
        Ok(_) => SyncOutcome::Updated,
        Err(err) if err.kind() == ErrorKind::NotFound => SyncOutcome::Created,
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read {}", target.display()));
        }
    };

    if outcome != SyncOutcome::Unchanged {
        if dry_run {
            tracing::debug!("Dry run: skipping write to {}", target.display());
        } else {
            std::fs::write(&target, template)
                .with_context(|| format!("Failed to write {}", target.display()))?;
        }
    }

    tracing::debug!("{}: {:?}", repo.display(), outcome);
    Ok(outcome)
}

/// Synchronize every repository in order and collect the outcomes
///
/// The first failure aborts the run; repositories already written stay written.
pub fn sync_all<I>(repos: I, template: &str, dry_run: bool) -> Result<SyncResult>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut result = SyncResult::new(dry_run);
    for repo in repos {
        let outcome = sync_repository(&repo, template, dry_run)?;
        result.record(repo, outcome);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_repo(root: &Path, name: &str, gitignore: Option<&str>) -> PathBuf {
        let repo = root.join(name);
        fs::create_dir_all(repo.join(".git")).unwrap();
        if let Some(content) = gitignore {
            fs::write(repo.join(GITIGNORE_FILE), content).unwrap();
        }
        repo
    }

    fn read_gitignore(repo: &Path) -> String {
        fs::read_to_string(repo.join(GITIGNORE_FILE)).unwrap()
    }

    #[test]
    fn test_sync_creates_missing_gitignore() {
        let temp_dir = TempDir::new().unwrap();
        let template = "# example\n__pycache__/\n";
        let repo = make_repo(temp_dir.path(), "sample", None);

        let result = sync_all(vec![repo.clone()], template, false).unwrap();

        assert_eq!(result.created, vec![repo.clone()]);
        assert_eq!(read_gitignore(&repo), template);
    }

    #[test]
    fn test_sync_updates_existing_gitignore() {
        let temp_dir = TempDir::new().unwrap();
        let template = "# canonical\n";
        let repo = make_repo(temp_dir.path(), "existing", Some("# old\n"));

        let result = sync_all(vec![repo.clone()], template, false).unwrap();

        assert_eq!(result.updated, vec![repo.clone()]);
        assert_eq!(read_gitignore(&repo), template);
    }

    #[test]
    fn test_sync_dry_run_does_not_touch_disk() {
        let temp_dir = TempDir::new().unwrap();
        let template = "# canonical\n";
        let existing = make_repo(temp_dir.path(), "existing", Some("# old\n"));
        let missing = make_repo(temp_dir.path(), "missing", None);

        let result = sync_all(vec![existing.clone(), missing.clone()], template, true).unwrap();

        assert!(result.dry_run);
        assert_eq!(result.updated, vec![existing.clone()]);
        assert_eq!(result.created, vec![missing.clone()]);
        assert_eq!(read_gitignore(&existing), "# old\n");
        assert!(!missing.join(GITIGNORE_FILE).exists());
    }

    #[test]
    fn test_matching_gitignore_is_not_rewritten() {
        let temp_dir = TempDir::new().unwrap();
        let template = "target/\n";
        let repo = make_repo(temp_dir.path(), "same", Some(template));
        let before = fs::metadata(repo.join(GITIGNORE_FILE)).unwrap().modified().unwrap();

        let outcome = sync_repository(&repo, template, false).unwrap();

        let after = fs::metadata(repo.join(GITIGNORE_FILE)).unwrap().modified().unwrap();
        assert_eq!(outcome, SyncOutcome::Unchanged);
        assert_eq!(before, after);
    }

    #[test]
    fn test_trailing_newline_difference_counts_as_update() {
        let temp_dir = TempDir::new().unwrap();
        let repo = make_repo(temp_dir.path(), "almost", Some("target/"));

        let outcome = sync_repository(&repo, "target/\n", false).unwrap();

        assert_eq!(outcome, SyncOutcome::Updated);
        assert_eq!(read_gitignore(&repo), "target/\n");
    }

    #[test]
    fn test_buckets_keep_traversal_order() {
        let temp_dir = TempDir::new().unwrap();
        let template = "*.log\n";
        let a = make_repo(temp_dir.path(), "a", None);
        let b = make_repo(temp_dir.path(), "b", Some(template));
        let c = make_repo(temp_dir.path(), "c", None);
        let d = make_repo(temp_dir.path(), "d", Some("old"));

        let result = sync_all(
            vec![a.clone(), b.clone(), c.clone(), d.clone()],
            template,
            false,
        )
        .unwrap();

        assert_eq!(result.created, vec![a, c]);
        assert_eq!(result.updated, vec![d]);
        assert_eq!(result.unchanged, vec![b]);
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_write_aborts_without_rollback() {
        let temp_dir = TempDir::new().unwrap();
        let template = "# canonical\n";
        let first = make_repo(temp_dir.path(), "a", None);
        let second = make_repo(temp_dir.path(), "b", None);
        // Dangling link: reading reports NotFound, writing cannot create the target
        std::os::unix::fs::symlink(
            second.join("missing-dir").join("gitignore"),
            second.join(GITIGNORE_FILE),
        )
        .unwrap();

        let err = sync_all(vec![first.clone(), second], template, false)
            .expect_err("Write into a missing directory should fail");

        assert!(err.to_string().contains("Failed to write"));
        assert_eq!(read_gitignore(&first), template);
    }

    #[test]
    fn test_unreadable_gitignore_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let repo = make_repo(temp_dir.path(), "odd", None);
        fs::create_dir(repo.join(GITIGNORE_FILE)).unwrap();

        let err = sync_repository(&repo, "x\n", false).expect_err("Directory target should fail");
        assert!(err.to_string().contains("Failed to read"));
    }
}
