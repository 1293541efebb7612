//! JSON export and import of prompt collections.
//!
//! Exports are always written as an envelope:
//!
//! ```json
//! { "version": 1, "exported_at": "2025-01-01T12:00:00Z", "prompts": [ ... ] }
//! ```
//!
//! Imports accept that envelope or a bare array of prompt objects. Only
//! `title` and `content` are required per entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{format_prompt_id, next_counter};
use crate::prompts::{Category, Prompt, PromptDraft};

pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("invalid import file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("import file version {0} is unsupported (expected {expected})", expected = EXPORT_VERSION)]
    UnsupportedVersion(u32),

    #[error("invalid prompt at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub prompts: Vec<Prompt>,
}

/// A prompt as it may appear in an import file.
#[derive(Debug, Clone, Deserialize)]
struct ImportedPrompt {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    category: Category,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportFile {
    Envelope {
        version: u32,
        prompts: Vec<ImportedPrompt>,
    },
    Bare(Vec<ImportedPrompt>),
}

pub fn export_document(prompts: &[Prompt], exported_at: DateTime<Utc>) -> ExportDocument {
    ExportDocument { version: EXPORT_VERSION, exported_at, prompts: prompts.to_vec() }
}

/// Serialize prompts as a pretty-printed export document.
pub fn export_json(prompts: &[Prompt]) -> Result<String, TransferError> {
    let doc = export_document(prompts, Utc::now());
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse an import file into complete prompt records.
///
/// Entries without an `id` are numbered after the highest `PRM-nnn` found
/// in `existing` and in the file itself. Missing timestamps default to now.
/// One invalid entry rejects the whole file.
pub fn parse_import(input: &str, existing: &[Prompt]) -> Result<Vec<Prompt>, TransferError> {
    let entries = match serde_json::from_str::<ImportFile>(input)? {
        ImportFile::Envelope { version, prompts } => {
            if version != EXPORT_VERSION {
                return Err(TransferError::UnsupportedVersion(version));
            }
            prompts
        }
        ImportFile::Bare(prompts) => prompts,
    };

    let mut counter = next_counter(
        existing
            .iter()
            .map(|p| p.id.as_str())
            .chain(entries.iter().filter_map(|e| e.id.as_deref())),
    );
    let now = Utc::now();

    let mut prompts = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let draft = PromptDraft::new(entry.title, entry.content, entry.category);
        draft
            .validate()
            .map_err(|e| TransferError::InvalidEntry { index, reason: e.to_string() })?;

        let id = match entry.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => {
                let next = counter.ok_or_else(|| TransferError::InvalidEntry {
                    index,
                    reason: "no prompt IDs left to assign".to_string(),
                })?;
                counter = next.checked_add(1);
                format_prompt_id(next)
            }
        };

        let created_at = entry.created_at.unwrap_or(now);
        prompts.push(Prompt {
            id,
            title: draft.title.trim().to_string(),
            content: draft.content,
            category: draft.category,
            created_at,
            updated_at: entry.updated_at.unwrap_or(created_at),
        });
    }

    Ok(prompts)
}
