//! Template rendering and the variable input form.

pub mod engine;
pub mod form;

pub use engine::{RenderContext, all_values_empty, render_string};
pub use form::{PREVIEW_PLACEHOLDER, Preview, VariableForm};
