//! Placeholder scanning and variable name extraction.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// A `{`, then anything except braces, then the first `}`.
///
/// Excluding `{` from the body keeps references flat: in `{a{b}` only
/// `{b}` is a reference and the leading `{a` stays literal.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("valid regex"));

/// A single `{...}` span found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Byte range of the whole span, braces included.
    pub span: Range<usize>,
    /// The span exactly as written, e.g. `"{ topic }"`.
    pub raw: String,
    /// The enclosed text with surrounding whitespace trimmed. May be empty.
    pub name: String,
}

impl Placeholder {
    /// Whether this span names a variable (`{}` and `{  }` do not).
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

pub(crate) fn placeholder_regex() -> &'static Regex {
    &PLACEHOLDER_RE
}

/// Return every placeholder span in `template`, left to right.
///
/// Empty spans are included so callers can see exactly what the
/// substituter will rewrite.
pub fn variable_occurrences(template: &str) -> Vec<Placeholder> {
    PLACEHOLDER_RE
        .captures_iter(template)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(Placeholder {
                span: whole.range(),
                raw: whole.as_str().to_string(),
                name: inner.as_str().trim().to_string(),
            })
        })
        .collect()
}

/// Extract the distinct variable names referenced by a template.
///
/// Names are trimmed, empty names are skipped, and each name appears once,
/// in the order it was first seen.
///
/// # Examples
/// ```
/// use promptlib_core::vars::extract_variable_names;
///
/// assert_eq!(extract_variable_names("Hello {name}"), vec!["name"]);
/// assert_eq!(extract_variable_names("{topic} and { topic }"), vec!["topic"]);
/// assert_eq!(extract_variable_names("{a}{b}"), vec!["a", "b"]);
/// assert!(extract_variable_names("literal { unclosed").is_empty());
/// ```
pub fn extract_variable_names(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vars = Vec::new();

    for cap in PLACEHOLDER_RE.captures_iter(template) {
        let name = cap[1].trim();
        if !name.is_empty() && seen.insert(name.to_string()) {
            vars.push(name.to_string());
        }
    }

    vars
}
