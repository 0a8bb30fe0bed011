//! # gitignore-sync
//!
//! Copies a canonical `.gitignore` template into every git repository found
//! directly under a workspace root, and reports which repositories were
//! created, updated, or already matched.
//!
//! ## Usage
//!
//! ```bash
//! # Preview which repositories would change
//! gitignore-sync --root ~/workspace --template ./gitignore-template.txt --dry-run
//!
//! # Apply the template
//! gitignore-sync --root ~/workspace --template ./gitignore-template.txt
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use gitignore_sync::sync::{Template, discover_repositories, sync_all};
//! use std::path::Path;
//!
//! let template = Template::load("gitignore-template.txt")?;
//! let repos = discover_repositories(Path::new("/srv/workspace"))?;
//! let result = sync_all(repos, template.content(), true)?;
//! println!("{result}");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Repositories are found one level deep only: the root itself and its
//! non-hidden child directories, each identified by a `.git` entry.
//! Comparison is exact whole-file equality; a mismatch replaces the file.

pub mod cli;
pub mod config;
pub mod sync;

pub use cli::{Cli, Output};
pub use config::SyncConfig;
pub use sync::{SyncOutcome, SyncResult};

/// Result type alias for gitignore-sync operations
pub type Result<T> = anyhow::Result<T>;
