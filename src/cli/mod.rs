//! Command-line interface for gitignore-sync
//!
//! Parses flags with clap, layers them over the loaded configuration, runs the
//! sync and prints the summary.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod output;

pub use output::Output;

use crate::config::{Overrides, SyncConfig};
use crate::sync;

/// Synchronise a canonical .gitignore across every repository in the workspace
#[derive(Parser, Debug)]
#[command(name = "gitignore-sync", author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root containing repositories (default: parent of this package)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Path to the canonical .gitignore template
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Show the repositories that would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress summary output (errors still propagate)
    #[arg(short, long)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", env = "GITIGNORE_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How the run summary is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Execute the sync described by the flags
    pub fn run(self) -> Result<()> {
        let config = SyncConfig::load_with_custom_config(self.config.as_deref())?
            .with_overrides(Overrides {
                root: self.root,
                template: self.template,
                dry_run: self.dry_run,
                quiet: self.quiet,
            })
            .resolved()?;

        // Quiet may come from a config file or the environment, not just the flag
        setup_logging(self.verbose, config.quiet);
        tracing::debug!("Effective configuration: {:?}", config);

        let output = Output::new(self.verbose > 0, config.quiet);
        let result = sync::run(&config)?;

        if !output.is_quiet() {
            match self.format {
                OutputFormat::Text => output.summary(&result),
                OutputFormat::Json => output.plain(&result.to_json()?),
            }
        }

        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Logs go to stderr so the summary on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
