//! List command - Print every alias with its directory

use anyhow::Result;
use std::io::Write;

use crate::store::AliasStore;

/// Lines of the alias listing, `alias: path`, in alias order
pub fn list_lines(store: &AliasStore) -> impl Iterator<Item = String> + '_ {
    store.iter().map(|(alias, path)| format!("{alias}: {path}"))
}

/// List all aliases
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn cmd_list<W: Write>(store: &AliasStore, out: &mut W) -> Result<()> {
    for line in list_lines(store) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
