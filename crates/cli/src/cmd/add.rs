use promptlib_core::config::types::ResolvedConfig;
use promptlib_core::prompts::PromptDraft;
use std::fs;

use super::{fail, fail_with_history, open_library};
use crate::AddArgs;

pub fn run(cfg: &ResolvedConfig, args: AddArgs) {
    let content = match (args.content, args.file) {
        (Some(content), _) => content,
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => fail("add", format!("failed to read {}: {e}", path.display())),
        },
        (None, None) => fail("add", "either --content or --file is required"),
    };

    let mut library = open_library(cfg, "add");
    match library.add(PromptDraft::new(args.title, content, args.category)) {
        Ok(prompt) => {
            println!("OK   plib add");
            println!("id: {}", prompt.id);
            let vars = prompt.variables();
            if !vars.is_empty() {
                println!("variables: {}", vars.join(", "));
            }
        }
        Err(e) => fail_with_history("add", e, &library),
    }
}
