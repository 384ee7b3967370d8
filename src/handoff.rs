//! Hand-off channel - tells the shell wrapper where to `cd`
//!
//! A child process cannot change its parent's working directory, so every
//! invocation ends by writing the target directory to a small file. The
//! wrapper function reads it, deletes it and performs the `cd` itself.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Writer for the hand-off file
#[derive(Debug, Clone)]
pub struct Handoff {
    path: PathBuf,
}

impl Handoff {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `dir` as the single line of the hand-off file
    ///
    /// Any previous content is replaced. No trailing newline is written so the
    /// wrapper can use the content as-is.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn emit(&self, dir: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create hand-off directory: {}", parent.display())
                })?;
            }
        }

        std::fs::write(&self.path, dir)
            .with_context(|| format!("Failed to write hand-off file: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), target = dir, "wrote hand-off");
        Ok(())
    }
}
