use promptlib_core::config::types::ResolvedConfig;
use promptlib_core::prompts::PromptPatch;
use promptlib_core::templates::VariableForm;

use super::{fail, fail_with_history, open_library};
use crate::EditArgs;

pub fn run(cfg: &ResolvedConfig, args: EditArgs) {
    let patch =
        PromptPatch { title: args.title, content: args.content, category: args.category };
    if patch.is_empty() {
        fail("edit", "nothing to change: pass --title, --content, or --category");
    }

    let mut library = open_library(cfg, "edit");
    let before = match library.get(&args.id) {
        Some(p) => VariableForm::new(p.content.clone()),
        None => fail("edit", format!("prompt not found: {}", args.id)),
    };

    match library.update(&args.id, &patch) {
        Ok(prompt) => {
            println!("OK   plib edit");
            println!("id: {}", prompt.id);

            let after = prompt.variables();
            let dropped: Vec<&str> = before
                .names()
                .iter()
                .filter(|n| !after.contains(*n))
                .map(String::as_str)
                .collect();
            let added: Vec<&str> = after
                .iter()
                .filter(|n| !before.names().contains(*n))
                .map(String::as_str)
                .collect();
            if !added.is_empty() {
                println!("new variables: {}", added.join(", "));
            }
            if !dropped.is_empty() {
                println!("removed variables: {}", dropped.join(", "));
            }
        }
        Err(e) => fail_with_history("edit", e, &library),
    }
}
