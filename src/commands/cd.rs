//! Cd command - Resolve an alias to its directory

use anyhow::Result;
use std::io::Write;

use crate::commands::common::report_missing_alias;
use crate::store::AliasStore;

/// Resolve `alias` to the directory it is bound to
///
/// Returns `None` after printing the alias-not-found message when the alias
/// is unknown, leaving the caller to navigate back to where it started.
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn cmd_goto<W: Write>(store: &AliasStore, alias: &str, out: &mut W) -> Result<Option<String>> {
    if let Some(dir) = store.get(alias) {
        tracing::debug!(alias, dir, "resolved alias");
        return Ok(Some(dir.to_string()));
    }

    report_missing_alias(out)?;
    Ok(None)
}
