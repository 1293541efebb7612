//! Shared output formatting for prompt commands.

use promptlib_core::prompts::Prompt;
use promptlib_core::query::Page;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Row for the prompt list table.
#[derive(Tabled)]
struct PromptRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Vars")]
    vars: usize,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Prompt> for PromptRow {
    fn from(p: &Prompt) -> Self {
        Self {
            id: p.id.clone(),
            title: truncate(&p.title, 40),
            category: p.category.to_string(),
            vars: p.variables().len(),
            updated: p.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Formatted prompt for JSON output.
#[derive(Debug, Serialize)]
pub struct PromptOutput<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub category: String,
    pub content: &'a str,
    pub variables: Vec<String>,
    pub updated_at: String,
}

impl<'a> From<&'a Prompt> for PromptOutput<'a> {
    fn from(p: &'a Prompt) -> Self {
        Self {
            id: &p.id,
            title: &p.title,
            category: p.category.to_string(),
            content: &p.content,
            variables: p.variables(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

pub fn print_page_table(page: &Page<&Prompt>) {
    if page.items.is_empty() {
        println!("(no prompts found)");
        return;
    }

    let rows: Vec<PromptRow> = page.items.iter().map(|p| PromptRow::from(*p)).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!(
        "\nPage {} of {} ({} prompts)",
        page.page, page.total_pages, page.total_items
    );
}

pub fn print_page_json(page: &Page<&Prompt>) {
    let out = Page {
        items: page.items.iter().map(|p| PromptOutput::from(*p)).collect::<Vec<_>>(),
        page: page.page,
        page_size: page.page_size,
        total_items: page.total_items,
        total_pages: page.total_pages,
    };
    match serde_json::to_string_pretty(&out) {
        Ok(json) => println!("{}", json),
        Err(e) => super::fail("list", e),
    }
}

/// Truncate to `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("a much longer title", 10), "a much ...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}
