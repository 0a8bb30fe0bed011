//! Human-readable and JSON summaries of a run

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

use super::SyncResult;

/// Prefix used on every summary heading
pub const SUMMARY_PREFIX: &str = "[gitignore-sync]";

impl fmt::Display for SyncResult {
    /// Lists created and updated repositories; unchanged ones are never shown
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "{SUMMARY_PREFIX} all repositories already match template");
        }

        let mut sections = Vec::new();
        if !self.created.is_empty() {
            sections.push(section("created", &self.created));
        }
        if !self.updated.is_empty() {
            sections.push(section("updated", &self.updated));
        }
        write!(f, "{}", sections.join("\n"))
    }
}

fn section(label: &str, repos: &[PathBuf]) -> String {
    let mut lines = vec![format!("{SUMMARY_PREFIX} {label}:")];
    lines.extend(repos.iter().map(|repo| format!("  - {}", repo.display())));
    lines.join("\n")
}

impl SyncResult {
    /// Render the result as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
