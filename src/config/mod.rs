//! Configuration management for gitignore-sync
//!
//! Settings are layered with figment: built-in defaults, then user and
//! workspace config files (TOML, JSON or YAML), then `GITIGNORE_SYNC_*`
//! environment variables. Command-line flags are applied last by the CLI.

pub mod core;

pub use self::core::{Overrides, SyncConfig};
