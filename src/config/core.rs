use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    value::magic::RelativePathBuf,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "GITIGNORE_SYNC_";

/// Base name of the workspace-local config file
pub const CONFIG_BASENAME: &str = "gitignore-sync";

/// Template location relative to this package's directory
pub const DEFAULT_TEMPLATE: &str = "resources/gitignore-template.txt";

/// Effective settings for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Workspace root containing repositories
    pub root: PathBuf,

    /// Path to the canonical .gitignore template
    pub template: PathBuf,

    /// Classify repositories without writing files
    #[serde(default)]
    pub dry_run: bool,

    /// Suppress summary output and logging
    #[serde(default)]
    pub quiet: bool,
}

/// Settings as extracted from figment; relative paths read from a config
/// file are anchored at that file's directory
#[derive(Debug, Deserialize)]
struct LayeredConfig {
    root: RelativePathBuf,
    template: RelativePathBuf,
    #[serde(default)]
    dry_run: bool,
    #[serde(default)]
    quiet: bool,
}

impl From<LayeredConfig> for SyncConfig {
    fn from(layered: LayeredConfig) -> Self {
        Self {
            root: layered.root.relative(),
            template: layered.template.relative(),
            dry_run: layered.dry_run,
            quiet: layered.quiet,
        }
    }
}

/// Values supplied on the command line; they win over every other source
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub dry_run: bool,
    pub quiet: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            template: default_template(),
            dry_run: false,
            quiet: false,
        }
    }
}

/// The directory holding this package, i.e. the workspace it was checked out into
fn default_root() -> PathBuf {
    let package_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    package_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| package_dir.to_path_buf())
}

fn default_template() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_TEMPLATE)
}

impl SyncConfig {
    /// Load configuration, using only `custom_config` in place of the user and
    /// workspace files when it is given
    pub fn load_with_custom_config(custom_config: Option<&Path>) -> Result<Self> {
        let layered: LayeredConfig = Self::figment(custom_config)?
            .extract()
            .context("Failed to parse gitignore-sync configuration")?;
        Ok(layered.into())
    }

    /// Build the layered figment without extracting it
    pub fn figment(custom_config: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(SyncConfig::default()));

        if let Some(custom_path) = custom_config {
            if !custom_path.is_file() {
                bail!("config file not found: {}", custom_path.display());
            }
            tracing::trace!("CONFIG LOAD: using {}", custom_path.display());
            let extension = custom_path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("")
                .to_lowercase();
            // Unknown extensions are read as TOML
            figment = match extension.as_str() {
                "json" => figment.merge(Json::file(custom_path)),
                "yaml" | "yml" => figment.merge(Yaml::file(custom_path)),
                _ => figment.merge(Toml::file(custom_path)),
            };
        } else {
            if let Some(user_path) = Self::user_config_path() {
                tracing::trace!("CONFIG LOAD: user config {}", user_path.display());
                figment = figment
                    .merge(Toml::file(&user_path))
                    .merge(Json::file(user_path.with_extension("json")))
                    .merge(Yaml::file(user_path.with_extension("yaml")))
                    .merge(Yaml::file(user_path.with_extension("yml")));
            }
            figment = figment
                .merge(Toml::file(format!("{CONFIG_BASENAME}.toml")))
                .merge(Json::file(format!("{CONFIG_BASENAME}.json")))
                .merge(Yaml::file(format!("{CONFIG_BASENAME}.yaml")))
                .merge(Yaml::file(format!("{CONFIG_BASENAME}.yml")));
        }

        // Environment variables always have highest priority
        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Apply command-line values on top of the loaded configuration
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(root) = overrides.root {
            self.root = root;
        }
        if let Some(template) = overrides.template {
            self.template = template;
        }
        self.dry_run |= overrides.dry_run;
        self.quiet |= overrides.quiet;
        self
    }

    /// Make `root` and `template` absolute against the current directory
    ///
    /// Paths from a config file are already anchored at that file's directory;
    /// this only affects paths given on the command line or in the environment.
    pub fn resolved(mut self) -> Result<Self> {
        self.root = std::path::absolute(&self.root)
            .with_context(|| format!("Failed to resolve root path: {}", self.root.display()))?;
        self.template = std::path::absolute(&self.template).with_context(|| {
            format!("Failed to resolve template path: {}", self.template.display())
        })?;
        Ok(self)
    }

    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join(CONFIG_BASENAME)
                .join("config.toml")
        })
    }
}
