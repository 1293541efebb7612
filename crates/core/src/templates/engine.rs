use std::collections::HashMap;

use regex::Captures;

use crate::vars::extract::placeholder_regex;

/// Values supplied by the caller, keyed by trimmed variable name.
pub type RenderContext = HashMap<String, String>;

/// Render a template by substituting `{name}` placeholders.
///
/// Every span the extractor recognises is replaced, braces included, by the
/// value stored under its trimmed name. Missing names and empty spans
/// (`{}`) render as the empty string. Braces that are not part of a span
/// are copied through unchanged.
///
/// Substitution is a single pass: a value that itself contains `{x}` is
/// emitted as-is and never expanded.
///
/// # Examples
/// ```
/// use promptlib_core::templates::engine::{RenderContext, render_string};
///
/// let mut ctx = RenderContext::new();
/// ctx.insert("name".into(), "John".into());
/// assert_eq!(render_string("Hi {name}", &ctx), "Hi John");
/// assert_eq!(render_string("Hi {name}", &RenderContext::new()), "Hi ");
/// ```
pub fn render_string(template: &str, ctx: &RenderContext) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            let name = caps[1].trim();
            if name.is_empty() {
                return String::new();
            }
            ctx.get(name).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// True when no value in the context has any content.
///
/// An empty context counts as "all empty".
pub fn all_values_empty(ctx: &RenderContext) -> bool {
    ctx.values().all(String::is_empty)
}
