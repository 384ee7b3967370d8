//! Diagnostic tracing for nav
//!
//! Everything goes to stderr: stdout carries user-facing messages and the
//! hand-off file carries the target directory, neither may be polluted.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset or invalid.
///
/// # Example
/// ```bash
/// RUST_LOG=nav=debug nav "$PWD" work
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
