use promptlib_core::config::types::ResolvedConfig;

use super::{fail, open_library};

pub fn run(cfg: &ResolvedConfig, id: &str) {
    let library = open_library(cfg, "show");
    let Some(prompt) = library.get(id) else {
        fail("show", format!("prompt not found: {id}"));
    };

    println!("{} - {}", prompt.id, prompt.title);
    println!("category: {}", prompt.category);
    println!("created:  {}", prompt.created_at.format("%Y-%m-%d %H:%M"));
    println!("updated:  {}", prompt.updated_at.format("%Y-%m-%d %H:%M"));

    let vars = prompt.variables();
    if vars.is_empty() {
        println!("variables: (none)");
    } else {
        println!("variables: {}", vars.join(", "));
    }

    println!();
    println!("{}", prompt.content);
}
