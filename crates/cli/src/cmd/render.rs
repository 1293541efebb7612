use promptlib_core::config::types::ResolvedConfig;
use promptlib_core::templates::VariableForm;
use tracing::{debug, warn};

use super::{fail, open_library};
use crate::prompt::{collect_values, PromptOptions};
use crate::RenderArgs;

pub fn run(cfg: &ResolvedConfig, args: RenderArgs) {
    debug!("Rendering {}", args.id);
    let library = open_library(cfg, "render");
    let Some(prompt) = library.get(&args.id) else {
        fail("render", format!("prompt not found: {}", args.id));
    };

    let mut form = VariableForm::new(prompt.content.clone());
    let rejected =
        form.set_values(args.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    for name in rejected {
        warn!("'{}' has no variable named '{}', ignoring", prompt.id, name);
    }

    let options = PromptOptions { batch_mode: args.batch };
    if let Err(e) = collect_values(&mut form, &options) {
        fail("render", e);
    }

    println!("{}", form.preview().display_text());
}
