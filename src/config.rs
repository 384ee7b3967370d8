//! Configuration module
//!
//! This module handles loading nav configuration from a TOML file.

pub mod loader;
pub mod schema;

pub use loader::expand_home;
pub use schema::{Config, HandoffConfig, StoreConfig};
