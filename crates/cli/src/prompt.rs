//! Interactive prompts for filling in template variables.
//!
//! Values passed with `--var` are kept; every other field is asked for in
//! extraction order when stdin is a terminal. In batch mode (or when piped)
//! nothing is asked and unset variables render as empty.

use dialoguer::{theme::ColorfulTheme, Input};
use promptlib_core::templates::VariableForm;
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt.
    pub batch_mode: bool,
}

/// Error type for variable collection.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Ask for every empty field of `form`. Returns the names that were asked.
pub fn collect_values(
    form: &mut VariableForm,
    options: &PromptOptions,
) -> Result<Vec<String>, PromptError> {
    let is_interactive = io::stdin().is_terminal() && !options.batch_mode;
    if !is_interactive {
        return Ok(Vec::new());
    }

    let missing: Vec<String> = form.missing().into_iter().map(str::to_string).collect();
    for name in &missing {
        let value = prompt_value(name)?;
        form.set_value(name, value);
    }

    Ok(missing)
}

fn prompt_value(name: &str) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();

    Input::<String>::with_theme(&theme)
        .with_prompt(name)
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}
