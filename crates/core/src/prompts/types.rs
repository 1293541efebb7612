use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vars::extract_variable_names;

/// Prompt category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coding,
    Writing,
    Marketing,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::Coding, Category::Writing, Category::Marketing, Category::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coding => "coding",
            Category::Writing => "writing",
            Category::Marketing => "marketing",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected one of: coding, writing, marketing, other)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coding" => Ok(Category::Coding),
            "writing" => Ok(Category::Writing),
            "marketing" => Ok(Category::Marketing),
            "other" => Ok(Category::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Validation errors for user-supplied prompt fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("prompt title must not be empty")]
    EmptyTitle,

    #[error("prompt content must not be empty")]
    EmptyContent,
}

/// A stored prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Library-unique ID (e.g., "PRM-007").
    pub id: String,

    pub title: String,

    /// Template text with `{variable}` placeholders.
    pub content: String,

    #[serde(default)]
    pub category: Category,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Prompt {
    /// Build a prompt from a validated draft, stamped with the current time.
    pub fn from_draft(id: impl Into<String>, draft: PromptDraft) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: draft.title.trim().to_string(),
            content: draft.content,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Variable names referenced by this prompt's content.
    pub fn variables(&self) -> Vec<String> {
        extract_variable_names(&self.content)
    }

    /// Apply a patch, bumping `updated_at`.
    ///
    /// The patched result is validated before anything is changed.
    pub fn apply_patch(&self, patch: &PromptPatch) -> Result<Prompt, PromptError> {
        let draft = PromptDraft {
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            content: patch.content.clone().unwrap_or_else(|| self.content.clone()),
            category: patch.category.unwrap_or(self.category),
        };
        draft.validate()?;

        Ok(Prompt {
            id: self.id.clone(),
            title: draft.title.trim().to_string(),
            content: draft.content,
            category: draft.category,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}

/// Fields entered when creating a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
}

impl PromptDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
    ) -> Self {
        Self { title: title.into(), content: content.into(), category }
    }

    pub fn validate(&self) -> Result<(), PromptError> {
        if self.title.trim().is_empty() {
            return Err(PromptError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(PromptError::EmptyContent);
        }
        Ok(())
    }
}

/// Partial update for an existing prompt. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
}

impl PromptPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Coding ".parse::<Category>(), Ok(Category::Coding));
        assert!("poetry".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Marketing).unwrap();
        assert_eq!(json, r#""marketing""#);
    }

    #[test]
    fn test_draft_validation() {
        assert_eq!(
            PromptDraft::new("  ", "body", Category::Other).validate(),
            Err(PromptError::EmptyTitle)
        );
        assert_eq!(
            PromptDraft::new("Title", "\n\t", Category::Other).validate(),
            Err(PromptError::EmptyContent)
        );
        assert!(PromptDraft::new("Title", "body", Category::Other).validate().is_ok());
    }

    #[test]
    fn test_from_draft_trims_title() {
        let prompt = Prompt::from_draft(
            "PRM-001",
            PromptDraft::new("  Review  ", "Review {code}", Category::Coding),
        );
        assert_eq!(prompt.title, "Review");
        assert_eq!(prompt.created_at, prompt.updated_at);
        assert_eq!(prompt.variables(), vec!["code"]);
    }

    #[test]
    fn test_apply_patch_keeps_identity() {
        let prompt = Prompt::from_draft(
            "PRM-001",
            PromptDraft::new("Old", "Hello {name}", Category::Writing),
        );
        let patch = PromptPatch { title: Some("New".into()), ..Default::default() };
        let updated = prompt.apply_patch(&patch).unwrap();

        assert_eq!(updated.id, "PRM-001");
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "Hello {name}");
        assert_eq!(updated.created_at, prompt.created_at);
        assert!(updated.updated_at >= prompt.updated_at);
    }

    #[test]
    fn test_apply_patch_rejects_empty_content() {
        let prompt =
            Prompt::from_draft("PRM-001", PromptDraft::new("T", "C", Category::Other));
        let patch = PromptPatch { content: Some("   ".into()), ..Default::default() };
        assert_eq!(prompt.apply_patch(&patch), Err(PromptError::EmptyContent));
    }
}
