use promptlib_core::config::loader::default_config_path;
use promptlib_core::config::types::ResolvedConfig;
use promptlib_core::storage::LibraryStore;
use std::path::Path;
use tracing::debug;

pub fn run(cfg: &ResolvedConfig, config: Option<&Path>) {
    debug!("Running doctor");

    println!("OK   plib doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", cfg.active_profile);
    println!("data_dir: {}", cfg.data_dir.display());
    println!("library_file: {}", cfg.library_file.display());
    println!("library.page_size: {}", cfg.page_size);
    println!("diagnostics.history_limit: {}", cfg.history_limit);
    println!("logging.level: {}", cfg.logging.level);

    let store = LibraryStore::new(&cfg.library_file);
    if !store.exists() {
        println!("library: (not created yet)");
        return;
    }
    match store.load() {
        Ok(prompts) => println!("library: {} prompts", prompts.len()),
        Err(e) => {
            println!("FAIL library");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
