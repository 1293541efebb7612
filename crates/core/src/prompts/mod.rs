//! Prompt records stored in the library.

mod types;

pub use types::{Category, ParseCategoryError, Prompt, PromptDraft, PromptError, PromptPatch};
