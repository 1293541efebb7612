//! Search, category filtering, and pagination over prompts.

use serde::Serialize;

use crate::prompts::{Category, Prompt};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptQuery {
    /// Case-insensitive text matched against title and content.
    pub search: Option<String>,
    pub category: Option<Category>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl Default for PromptQuery {
    fn default() -> Self {
        Self { search: None, category: None, page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl PromptQuery {
    pub fn matches(&self, prompt: &Prompt) -> bool {
        if let Some(category) = self.category {
            if prompt.category != category {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                prompt.title.to_lowercase().contains(&needle)
                    || prompt.content.to_lowercase().contains(&needle)
            }
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Split `items` into pages and return the requested one.
///
/// Page 0 is treated as page 1, a page past the end is clamped to the last
/// page, and there is always at least one (possibly empty) page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let items =
        items.into_iter().skip((page - 1) * page_size).take(page_size).collect();

    Page { items, page, page_size, total_items, total_pages }
}

/// Filter, sort (most recently updated first), and paginate.
pub fn run_query<'a>(prompts: &'a [Prompt], query: &PromptQuery) -> Page<&'a Prompt> {
    let mut matched: Vec<&Prompt> = prompts.iter().filter(|p| query.matches(p)).collect();
    matched.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
    paginate(matched, query.page, query.page_size)
}
