//! Set command - Bind an alias to the caller's directory

use anyhow::Result;
use std::io::Write;

use crate::store::AliasStore;

/// Bind `name` to `cwd` and persist the store
///
/// An existing binding is replaced without warning.
///
/// # Errors
/// Returns an error if the store cannot be saved or output fails
pub fn cmd_set<W: Write>(
    store: &mut AliasStore,
    name: &str,
    cwd: &str,
    out: &mut W,
) -> Result<()> {
    if let Some(previous) = store.set(name, cwd) {
        tracing::debug!(alias = name, previous = %previous, "overwriting alias");
    }
    store.save()?;

    writeln!(out, "'{name}' added to nav")?;
    Ok(())
}
