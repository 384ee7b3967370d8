use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, CommandFactory, Parser};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::{OsStr, OsString};

use crate::config::Config;
use crate::store::AliasStore;

/// Navigate to a directory using an alias
#[derive(Parser, Debug)]
#[command(name = "nav", version, about, long_about = None)]
#[command(group(ArgGroup::new("action").args(["alias", "set", "remove"])))]
pub struct Cli {
    /// Working directory of the calling shell (passed by the wrapper)
    #[arg(hide = true)]
    pub cwd: String,

    /// The alias for a directory
    #[arg(
        value_parser = NonEmptyStringValueParser::new(),
        add = ArgValueCompleter::new(list_aliases)
    )]
    pub alias: Option<String>,

    /// List aliases
    #[arg(short, long)]
    pub list: bool,

    /// Set alias to current directory
    #[arg(
        short,
        long,
        value_name = "NAME",
        value_parser = NonEmptyStringValueParser::new(),
        add = ArgValueCompleter::new(list_aliases)
    )]
    pub set: Option<String>,

    /// Remove alias
    #[arg(
        short,
        long,
        value_name = "NAME",
        value_parser = NonEmptyStringValueParser::new(),
        add = ArgValueCompleter::new(list_aliases)
    )]
    pub remove: Option<String>,
}

/// The single action selected by an invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    List,
    Set(&'a str),
    Remove(&'a str),
    Goto(&'a str),
    Usage,
}

impl Cli {
    /// Select the operation to run
    ///
    /// `--list` wins over everything else; `alias`, `--set` and `--remove`
    /// are mutually exclusive at parse time.
    #[must_use]
    pub fn operation(&self) -> Operation<'_> {
        if self.list {
            Operation::List
        } else if let Some(name) = &self.set {
            Operation::Set(name)
        } else if let Some(name) = &self.remove {
            Operation::Remove(name)
        } else if let Some(alias) = &self.alias {
            Operation::Goto(alias)
        } else {
            Operation::Usage
        }
    }

    /// Short usage line for `nav`
    #[must_use]
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

/// Arguments the parser rejected (or help/version requests)
#[derive(Debug)]
pub struct UsageError {
    /// Parser diagnostic, printed as-is
    pub error: clap::Error,
    /// Raw first argument, used as the hand-off directory
    pub fallback: Option<String>,
}

/// Parse and validate the full argument list (program name first)
///
/// # Errors
/// Returns a [`UsageError`] carrying the raw first token when clap rejects
/// the input, so the caller can still send the shell somewhere sensible.
pub fn validate<I, T>(args: I) -> Result<Cli, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    Cli::try_parse_from(&args).map_err(|error| UsageError {
        error,
        fallback: args.get(1).map(|raw| raw.to_string_lossy().into_owned()),
    })
}

/// List aliases from the configured store for completion
///
/// Returns empty Vec if the store is missing or unreadable.
/// Filters alias names by the provided prefix.
#[must_use]
pub fn list_aliases(current: &OsStr) -> Vec<CompletionCandidate> {
    let config = Config::load().unwrap_or_default();

    let Ok(Some(store)) = AliasStore::open_existing(config.store_path()) else {
        return Vec::new();
    };

    let prefix = current.to_string_lossy();

    store
        .names()
        .filter(|name| name.starts_with(&*prefix))
        .map(CompletionCandidate::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, UsageError> {
        validate(std::iter::once("nav").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_alias_selects_goto() {
        let cli = parse(&["/home/u", "work"]).unwrap();
        assert_eq!(cli.cwd, "/home/u");
        assert_eq!(cli.operation(), Operation::Goto("work"));
    }

    #[test]
    fn test_short_and_long_flags() {
        let cli = parse(&["/home/u", "-s", "work"]).unwrap();
        assert_eq!(cli.operation(), Operation::Set("work"));

        let cli = parse(&["/home/u", "--set", "work"]).unwrap();
        assert_eq!(cli.operation(), Operation::Set("work"));

        let cli = parse(&["/home/u", "-r", "work"]).unwrap();
        assert_eq!(cli.operation(), Operation::Remove("work"));

        let cli = parse(&["/home/u", "--remove", "work"]).unwrap();
        assert_eq!(cli.operation(), Operation::Remove("work"));

        let cli = parse(&["/home/u", "-l"]).unwrap();
        assert_eq!(cli.operation(), Operation::List);

        let cli = parse(&["/home/u", "--list"]).unwrap();
        assert_eq!(cli.operation(), Operation::List);
    }

    #[test]
    fn test_no_action_is_usage() {
        let cli = parse(&["/home/u"]).unwrap();
        assert_eq!(cli.operation(), Operation::Usage);
    }

    #[test]
    fn test_list_takes_priority() {
        let cli = parse(&["/home/u", "-l", "-s", "work"]).unwrap();
        assert_eq!(cli.operation(), Operation::List);

        let cli = parse(&["/home/u", "--list", "work"]).unwrap();
        assert_eq!(cli.operation(), Operation::List);
    }

    #[test]
    fn test_alias_conflicts_with_set() {
        let err = parse(&["/home/u", "work", "-s", "other"]).unwrap_err();
        assert_eq!(err.error.kind(), ErrorKind::ArgumentConflict);
        assert_eq!(err.fallback.as_deref(), Some("/home/u"));
    }

    #[test]
    fn test_set_conflicts_with_remove() {
        let err = parse(&["/home/u", "-s", "a", "-r", "b"]).unwrap_err();
        assert_eq!(err.error.kind(), ErrorKind::ArgumentConflict);
        assert_eq!(err.fallback.as_deref(), Some("/home/u"));
    }

    #[test]
    fn test_missing_cwd_has_no_fallback() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.error.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.fallback, None);
    }

    #[test]
    fn test_unknown_flag_falls_back_to_first_token() {
        let err = parse(&["/home/u", "--bogus"]).unwrap_err();
        assert_eq!(err.error.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.fallback.as_deref(), Some("/home/u"));
    }

    #[test]
    fn test_empty_alias_is_rejected() {
        let err = parse(&["/home/u", "-s", ""]).unwrap_err();
        assert_eq!(err.fallback.as_deref(), Some("/home/u"));
    }

    #[test]
    fn test_help_is_reported_as_usage_error() {
        let err = parse(&["/home/u", "--help"]).unwrap_err();
        assert_eq!(err.error.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.fallback.as_deref(), Some("/home/u"));
    }

    #[test]
    fn test_cwd_is_hidden_from_help() {
        let help = Cli::command().render_help().to_string();
        assert!(
            !help.contains("passed by the wrapper"),
            "cwd should be hidden: {help}"
        );
        assert!(help.contains("--set"));
        assert!(help.contains("--remove"));
        assert!(help.contains("--list"));
    }

    #[test]
    fn test_usage_mentions_program_name() {
        assert!(Cli::usage().contains("nav"));
    }
}
