// Export modules for testing
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod handoff;
pub mod logging;
pub mod store;

// Command modules
pub mod commands;
