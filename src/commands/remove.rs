//! Remove command - Delete an alias binding

use anyhow::Result;
use std::io::Write;

use crate::commands::common::report_missing_alias;
use crate::store::AliasStore;

/// Remove `name` from the store
///
/// The store is rewritten whether or not the alias existed. A missing alias
/// is reported on `out` but is not an error.
///
/// # Errors
/// Returns an error if the store cannot be saved or output fails
pub fn cmd_remove<W: Write>(store: &mut AliasStore, name: &str, out: &mut W) -> Result<()> {
    let removed = store.remove(name);
    store.save()?;

    if removed.is_some() {
        writeln!(out, "'{name}' removed from nav")?;
    } else {
        tracing::debug!(alias = name, "remove of unknown alias");
        report_missing_alias(out)?;
    }
    Ok(())
}
