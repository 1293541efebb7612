use promptlib_core::config::types::ResolvedConfig;

use super::{fail_with_history, open_library};

pub fn run(cfg: &ResolvedConfig, id: &str) {
    let mut library = open_library(cfg, "delete");
    match library.delete(id) {
        Ok(prompt) => {
            println!("OK   plib delete");
            println!("deleted: {} - {}", prompt.id, prompt.title);
        }
        Err(e) => fail_with_history("delete", e, &library),
    }
}
