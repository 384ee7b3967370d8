//! Shared helpers for command handlers

use std::io::Write;

/// Message printed when an alias lookup or removal misses
pub const ALIAS_NOT_FOUND: &str = "nav: error: That alias does not exist";

/// Print the alias-not-found message
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn report_missing_alias<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{ALIAS_NOT_FOUND}")
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::store::AliasStore;
    use tempfile::TempDir;

    /// Store in a scratch directory, seeded with `entries`
    pub fn seeded_store(dir: &TempDir, entries: &[(&str, &str)]) -> AliasStore {
        let mut store = AliasStore::load(dir.path().join("alias.json")).unwrap();
        for (alias, path) in entries {
            store.set(alias, path);
        }
        store.save().unwrap();
        store
    }

    pub fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }
}
