//! Configuration loading logic

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::schema::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load the global configuration, falling back to defaults
    ///
    /// Load priority:
    /// 1. Global config (~/.config/nav/config.toml)
    /// 2. Default config
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        if let Some(global_config) = Self::global_config_path() {
            if global_config.exists() {
                tracing::debug!(path = %global_config.display(), "loading config");
                return Self::from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, reporting problems instead of failing
    ///
    /// Navigation must still happen when the config file is broken, so
    /// errors are printed as a warning and the defaults are used.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("using default configuration: {err:#}");
            eprintln!("nav: warning: {err:#}");
            Self::default()
        })
    }

    /// Get the global config path
    /// Respects `XDG_CONFIG_HOME` environment variable on all platforms.
    /// Fallback: `$HOME/.config/nav/config.toml`
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join("nav").join("config.toml"))
    }

    /// Resolved path of the alias store file
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        expand_home(&self.store.path)
    }

    /// Resolved path of the hand-off file
    #[must_use]
    pub fn handoff_path(&self) -> PathBuf {
        expand_home(&self.handoff.path)
    }
}

/// Expand a leading `~` to the home directory
///
/// Paths without a leading `~` (or with no known home) are returned unchanged.
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
