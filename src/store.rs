//! Alias store - persisted mapping from alias name to directory

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised while reading or writing the alias store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("alias store {} is corrupt", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to {action} alias store {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize alias store")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Alias store backed by a single JSON file
///
/// Keys are alias names, values are directory paths stored verbatim.
/// Iteration is always in lexicographic alias order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasStore {
    path: PathBuf,
    aliases: BTreeMap<String, String>,
}

impl AliasStore {
    /// Load the store from `path`
    ///
    /// A missing file is treated as a first run: an empty store is created on
    /// disk and returned. A file that exists but is not a JSON object of
    /// strings is reported as [`StoreError::Corrupt`] and left untouched.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, decoded or created
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "alias store missing, creating empty store");
            let store = Self {
                path,
                aliases: BTreeMap::new(),
            };
            store.save()?;
            return Ok(store);
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| StoreError::io("read", &path, e))?;
        let aliases = decode(&content).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), count = aliases.len(), "loaded alias store");
        Ok(Self { path, aliases })
    }

    /// Read the store without creating it
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or decoded
    pub fn open_existing(path: impl Into<PathBuf>) -> Result<Option<Self>, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Rewrite the whole store file
    ///
    /// Content is written to a temporary file in the same directory and then
    /// renamed over the target, so readers never observe a partial file.
    ///
    /// # Errors
    /// Returns an error if serialization or any file operation fails
    pub fn save(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.aliases).map_err(StoreError::Serialize)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)
            .map_err(|e| StoreError::io("create directory for", &self.path, e))?;

        let mut file =
            temp_file_for(&self.path, &dir).map_err(|e| StoreError::io("write", &self.path, e))?;
        writeln!(file, "{content}").map_err(|e| StoreError::io("write", &self.path, e))?;
        file.persist(&self.path)
            .map_err(|e| StoreError::io("replace", &self.path, e.error))?;

        tracing::debug!(
            path = %self.path.display(),
            count = self.aliases.len(),
            "saved alias store"
        );
        Ok(())
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory bound to `alias`, if any
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Bind `alias` to `dir`, returning the previous binding
    pub fn set(&mut self, alias: &str, dir: &str) -> Option<String> {
        self.aliases.insert(alias.to_string(), dir.to_string())
    }

    /// Remove `alias`, returning the directory it was bound to
    pub fn remove(&mut self, alias: &str) -> Option<String> {
        self.aliases.remove(alias)
    }

    /// All bindings in alias order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Alias names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

// The replacement keeps the existing file's mode; a new store gets the
// umask default rather than the 0600 of a plain temp file
fn temp_file_for(target: &Path, dir: &Path) -> std::io::Result<NamedTempFile> {
    if let Ok(metadata) = std::fs::metadata(target) {
        let file = NamedTempFile::new_in(dir)?;
        file.as_file().set_permissions(metadata.permissions())?;
        return Ok(file);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tempfile::Builder::new()
            .permissions(std::fs::Permissions::from_mode(0o666))
            .tempfile_in(dir)
    }
    #[cfg(not(unix))]
    {
        NamedTempFile::new_in(dir)
    }
}

// Empty files come from older versions that created the store without content
fn decode(content: &str) -> Result<BTreeMap<String, String>, serde_json::Error> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(content)
}
