//! Export and import commands.

use promptlib_core::config::types::ResolvedConfig;
use promptlib_core::library::LibraryEvent;
use std::fs;
use std::path::Path;

use super::{fail, fail_with_history, open_library};

pub fn export(cfg: &ResolvedConfig, output: Option<&Path>) {
    let library = open_library(cfg, "export");
    let json = match library.export_json() {
        Ok(j) => j,
        Err(e) => fail("export", e),
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, json) {
                fail("export", format!("failed to write {}: {e}", path.display()));
            }
            println!("OK   plib export");
            println!("wrote {} prompts to {}", library.prompts().len(), path.display());
        }
        None => println!("{}", json),
    }
}

pub fn import(cfg: &ResolvedConfig, file: &Path) {
    let input = match fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => fail("import", format!("failed to read {}: {e}", file.display())),
    };

    let mut library = open_library(cfg, "import");
    match library.import_json(&input) {
        Ok(LibraryEvent::Imported { added, replaced }) => {
            println!("OK   plib import");
            println!("added: {added}");
            println!("replaced: {replaced}");
        }
        Ok(other) => println!("OK   plib import ({other:?})"),
        Err(e) => fail_with_history("import", e, &library),
    }
}
