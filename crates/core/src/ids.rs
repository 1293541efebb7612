//! ID generation for prompts.
//!
//! Prompts get a `PRM-` prefix and a zero-padded counter (e.g., "PRM-001").
//! The counter keeps growing past 999 without extra padding.

use crate::prompts::Prompt;

pub const PROMPT_ID_PREFIX: &str = "PRM";

/// Format a prompt ID from a counter.
///
/// # Examples
/// ```
/// use promptlib_core::ids::format_prompt_id;
///
/// assert_eq!(format_prompt_id(1), "PRM-001");
/// assert_eq!(format_prompt_id(42), "PRM-042");
/// assert_eq!(format_prompt_id(1234), "PRM-1234");
/// ```
pub fn format_prompt_id(counter: u32) -> String {
    format!("{}-{:03}", PROMPT_ID_PREFIX, counter)
}

/// Parse the counter out of a prompt ID.
///
/// Returns None if the ID was not generated by [`format_prompt_id`].
///
/// # Examples
/// ```
/// use promptlib_core::ids::parse_prompt_id;
///
/// assert_eq!(parse_prompt_id("PRM-007"), Some(7));
/// assert_eq!(parse_prompt_id("PRM-x"), None);
/// assert_eq!(parse_prompt_id("imported-1"), None);
/// ```
pub fn parse_prompt_id(id: &str) -> Option<u32> {
    let (prefix, counter) = id.split_once('-')?;
    if prefix != PROMPT_ID_PREFIX {
        return None;
    }
    counter.parse().ok()
}

/// Next free ID above the highest generated ID in `existing`.
///
/// IDs that don't follow the `PRM-nnn` pattern are ignored. Returns None
/// once the counter is at `u32::MAX`.
pub fn generate_prompt_id(existing: &[Prompt]) -> Option<String> {
    next_counter(existing.iter().map(|p| p.id.as_str())).map(format_prompt_id)
}

pub(crate) fn next_counter<'a>(ids: impl Iterator<Item = &'a str>) -> Option<u32> {
    match ids.filter_map(parse_prompt_id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::{Category, PromptDraft};

    fn prompt(id: &str) -> Prompt {
        Prompt::from_draft(id, PromptDraft::new("t", "c", Category::Other))
    }

    #[test]
    fn test_generate_on_empty_library() {
        assert_eq!(generate_prompt_id(&[]).as_deref(), Some("PRM-001"));
    }

    #[test]
    fn test_generate_uses_highest_counter() {
        let existing = vec![prompt("PRM-003"), prompt("PRM-010"), prompt("PRM-002")];
        assert_eq!(generate_prompt_id(&existing).as_deref(), Some("PRM-011"));
    }

    #[test]
    fn test_generate_ignores_foreign_ids() {
        let existing = vec![prompt("abc"), prompt("PRM-002"), prompt("XYZ-900")];
        assert_eq!(generate_prompt_id(&existing).as_deref(), Some("PRM-003"));
    }

    #[test]
    fn test_generate_stops_at_max_counter() {
        let existing = vec![prompt("PRM-001"), prompt(&format_prompt_id(u32::MAX))];
        assert_eq!(generate_prompt_id(&existing), None);
    }
}
