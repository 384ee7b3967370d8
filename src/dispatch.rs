//! Command dispatcher - one pass from arguments to a hand-off directory
//!
//! Every invocation ends in a [`Navigation`]; nothing here exits the process.

use anyhow::Result;
use std::ffi::OsString;
use std::io::Write;

use crate::cli::{self, Cli, Operation, UsageError};
use crate::commands;
use crate::config::Config;
use crate::store::AliasStore;

/// Where the shell wrapper should end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// An alias resolved to this directory
    Alias(String),
    /// Back to the caller's working directory
    Return(String),
    /// Arguments were rejected; the raw first token (or the process
    /// working directory when there was none)
    Fallback(String),
}

impl Navigation {
    /// Directory to write to the hand-off channel
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Alias(dir) | Self::Return(dir) | Self::Fallback(dir) => dir,
        }
    }
}

/// Run one invocation
///
/// `args` is the full command line including the program name. Messages for
/// the user are written to `out`; parser diagnostics go to the terminal the
/// way clap prints them.
pub fn run<I, T, W>(args: I, config: &Config, out: &mut W) -> Navigation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let cli = match cli::validate(args) {
        Ok(cli) => cli,
        Err(usage) => return fallback(usage),
    };

    match execute(&cli, config, out) {
        Ok(Some(dir)) => Navigation::Alias(dir),
        Ok(None) => Navigation::Return(cli.cwd),
        Err(err) => {
            tracing::warn!("{err:#}");
            if let Err(write_err) = writeln!(out, "nav: error: {err:#}") {
                tracing::debug!("failed to report error: {write_err}");
            }
            Navigation::Return(cli.cwd)
        }
    }
}

fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<Option<String>> {
    let mut store = AliasStore::load(config.store_path())?;

    let operation = cli.operation();
    tracing::debug!(?operation, cwd = %cli.cwd, "dispatching");

    match operation {
        Operation::List => commands::list::cmd_list(&store, out)?,
        Operation::Set(name) => commands::set::cmd_set(&mut store, name, &cli.cwd, out)?,
        Operation::Remove(name) => commands::remove::cmd_remove(&mut store, name, out)?,
        Operation::Goto(alias) => return commands::cd::cmd_goto(&store, alias, out),
        Operation::Usage => writeln!(out, "{}", Cli::usage())?,
    }

    Ok(None)
}

fn fallback(usage: UsageError) -> Navigation {
    tracing::debug!(kind = ?usage.error.kind(), "argument validation failed");
    if let Err(err) = usage.error.print() {
        tracing::debug!("failed to print usage error: {err}");
    }

    let target = usage.fallback.unwrap_or_else(|| {
        std::env::current_dir().map_or_else(|_| ".".to_string(), |dir| dir.display().to_string())
    });
    Navigation::Fallback(target)
}
