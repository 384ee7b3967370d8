//! Configuration schema and type definitions

use serde::Deserialize;

/// Configuration for nav
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub handoff: HandoffConfig,
}

/// Alias store settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// File holding the alias mapping
    /// Relative paths resolve against the working directory; `~/` is expanded
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "alias.json".to_string()
}

/// Hand-off channel settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HandoffConfig {
    /// File the shell wrapper reads the target directory from
    #[serde(default = "default_handoff_path")]
    pub path: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            path: default_handoff_path(),
        }
    }
}

fn default_handoff_path() -> String {
    "tmp".to_string()
}
