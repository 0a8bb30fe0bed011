//! Console output for gitignore-sync
//!
//! Styling comes from `console`, which drops colors on its own when stdout is
//! not a terminal.

use console::style;

use crate::sync::SyncResult;

/// Output handler for consistent CLI formatting
#[derive(Debug, Clone, Copy)]
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print raw text, e.g. machine-readable output
    pub fn plain(&self, text: &str) {
        if !self.quiet {
            println!("{text}");
        }
    }

    /// Print the text summary of a run
    pub fn summary(&self, result: &SyncResult) {
        if self.quiet {
            return;
        }
        self.verbose(&format!(
            "{} repositories checked, {} unchanged",
            result.total(),
            result.unchanged.len()
        ));
        for line in result.to_string().lines() {
            if line.starts_with("  - ") {
                println!("{}", line);
            } else if result.is_clean() {
                println!("{}", style(line).green());
            } else {
                println!("{}", style(line).bold());
            }
        }
        if result.dry_run && !result.is_clean() {
            self.info("dry run: no files were written");
        }
    }

    /// Get quiet mode status
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
