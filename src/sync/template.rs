//! Canonical template loading

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The desired content of every `.gitignore`, loaded once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: PathBuf,
    content: String,
}

impl Template {
    /// Read the template file at `path`
    ///
    /// A missing file is reported as `template file not found: <path>` with
    /// the underlying I/O error kept as the source. Other I/O errors are
    /// returned as they are.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(err)
                    .with_context(|| format!("template file not found: {}", path.display()));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            source: path.to_path_buf(),
            content,
        })
    }

    /// Path the template was read from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Full template text
    pub fn content(&self) -> &str {
        &self.content
    }
}
