use promptlib_core::config::types::ResolvedConfig;
use promptlib_core::vars::{extract_variable_names, variable_occurrences};

use super::{fail, open_library};
use crate::VarsArgs;

pub fn run(cfg: &ResolvedConfig, args: VarsArgs) {
    let template = match (args.template, args.id) {
        (Some(t), _) => t,
        (None, Some(id)) => {
            let library = open_library(cfg, "vars");
            match library.get(&id) {
                Some(p) => p.content.clone(),
                None => fail("vars", format!("prompt not found: {id}")),
            }
        }
        (None, None) => fail("vars", "either a prompt ID or --template is required"),
    };

    let names = extract_variable_names(&template);
    if names.is_empty() {
        println!("(no variables)");
        return;
    }

    let occurrences = variable_occurrences(&template);
    for name in &names {
        let count = occurrences.iter().filter(|o| &o.name == name).count();
        if count > 1 {
            println!("{name} (x{count})");
        } else {
            println!("{name}");
        }
    }
}
