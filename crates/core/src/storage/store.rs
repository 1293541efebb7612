use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::prompts::Prompt;

pub const STORAGE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read library file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write library file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse library file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize library: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("library file version {0} is unsupported (expected {expected})", expected = STORAGE_VERSION)]
    UnsupportedVersion(u32),
}

type Result<T> = std::result::Result<T, StorageError>;

/// The persisted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredLibrary {
    pub version: u32,
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}

/// Reads and writes the library file.
#[derive(Debug, Clone)]
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all prompts. A missing file is an empty library.
    pub fn load(&self) -> Result<Vec<Prompt>> {
        if !self.path.exists() {
            debug!("No library file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::Read { path: self.path.clone(), source: e })?;

        let stored: StoredLibrary = serde_json::from_str(&content)
            .map_err(|e| StorageError::Parse { path: self.path.clone(), source: e })?;

        if stored.version != STORAGE_VERSION {
            return Err(StorageError::UnsupportedVersion(stored.version));
        }

        debug!("Loaded {} prompts from {}", stored.prompts.len(), self.path.display());
        Ok(stored.prompts)
    }

    /// Write all prompts, replacing the file atomically.
    pub fn save(&self, prompts: &[Prompt]) -> Result<()> {
        let doc = StoredLibrary { version: STORAGE_VERSION, prompts: prompts.to_vec() };
        let content =
            serde_json::to_string_pretty(&doc).map_err(StorageError::Serialize)?;

        let write_err = |e| StorageError::Write { path: self.path.clone(), source: e };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;

        debug!("Saved {} prompts to {}", prompts.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::{Category, PromptDraft};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_library() {
        let tmp = tempdir().unwrap();
        let store = LibraryStore::new(tmp.path().join("library.json"));
        assert!(store.load().unwrap().is_empty());
        assert!(!store.exists());
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempdir().unwrap();
        let store = LibraryStore::new(tmp.path().join("nested/dir/library.json"));
        let prompt = Prompt::from_draft(
            "PRM-001",
            PromptDraft::new("Greeting", "Hello {name}", Category::Writing),
        );

        store.save(std::slice::from_ref(&prompt)).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, vec![prompt]);
        assert!(!tmp.path().join("nested/dir/library.json.tmp").exists());
    }

    #[test]
    fn test_unsupported_version() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("library.json");
        fs::write(&path, r#"{"version": 2, "prompts": []}"#).unwrap();

        match LibraryStore::new(&path).load() {
            Err(e @ StorageError::UnsupportedVersion(2)) => {
                assert_eq!(e.to_string(), "library file version 2 is unsupported (expected 1)");
            }
            other => panic!("expected UnsupportedVersion(2), got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("library.json");
        fs::write(&path, "{ not json").unwrap();

        match LibraryStore::new(&path).load() {
            Err(StorageError::Parse { .. }) => {}
            other => panic!("expected Parse error, got {other:?}"),
        }
    }
}
