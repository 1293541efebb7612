pub mod add;
pub mod delete;
pub mod doctor;
pub mod edit;
pub mod list;
pub mod output;
pub mod render;
pub mod show;
pub mod transfer;
pub mod vars;

use promptlib_core::config::loader::{default_config_path, ConfigLoader};
use promptlib_core::config::types::ResolvedConfig;
use promptlib_core::library::Library;
use std::path::Path;

/// Load configuration or exit with a `FAIL plib <cmd>` report.
pub fn load_config(config: Option<&Path>, profile: Option<&str>, cmd: &str) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL plib {cmd}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Open the library for the active profile or exit.
pub fn open_library(cfg: &ResolvedConfig, cmd: &str) -> Library {
    match Library::from_config(cfg) {
        Ok(lib) => lib,
        Err(e) => fail(cmd, e),
    }
}

pub fn fail(cmd: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("FAIL plib {cmd}");
    eprintln!("{err}");
    std::process::exit(1);
}

/// Like [`fail`], followed by the errors the library recorded this run.
pub fn fail_with_history(cmd: &str, err: impl std::fmt::Display, library: &Library) -> ! {
    eprintln!("FAIL plib {cmd}");
    eprintln!("{err}");
    if !library.errors().is_empty() {
        eprintln!("recent errors:");
        for entry in library.errors().entries() {
            eprintln!(
                "  {} [{}] {}",
                entry.ts.format("%Y-%m-%d %H:%M:%S"),
                entry.context,
                entry.message
            );
        }
    }
    std::process::exit(1);
}
