//! Variable extraction for prompt templates.
//!
//! A template references a variable with a single pair of curly braces,
//! `{name}`. Whitespace around the name is ignored, so `{ name }` and
//! `{name}` denote the same variable. There is no escaping mechanism: a
//! brace that is not part of a well-formed reference is plain text.

pub mod extract;

pub use extract::{Placeholder, extract_variable_names, variable_occurrences};
