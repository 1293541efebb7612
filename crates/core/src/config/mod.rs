//! TOML configuration with named profiles.

pub mod loader;
pub mod types;
