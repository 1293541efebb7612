use std::sync::mpsc::{Receiver, Sender, channel};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::types::ResolvedConfig;
use crate::diagnostics::ErrorLog;
use crate::ids::generate_prompt_id;
use crate::prompts::{Prompt, PromptDraft, PromptError, PromptPatch};
use crate::query::{Page, PromptQuery, run_query};
use crate::storage::{LibraryStore, StorageError};
use crate::transfer::{TransferError, export_json, parse_import};

use super::action::{Action, LibraryEvent};
use super::reducer::{LibraryState, reduce};

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("prompt not found: {0}")]
    NotFound(String),

    #[error("no prompt IDs left to assign")]
    IdsExhausted,

    #[error(transparent)]
    Invalid(#[from] PromptError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

type Result<T> = std::result::Result<T, LibraryError>;

/// The prompt library: current state, its storage, and the error history.
///
/// All mutations go through [`Library::dispatch`]. A change is only kept
/// once it has been written to disk; subscribers are notified afterwards.
#[derive(Debug)]
pub struct Library {
    state: LibraryState,
    store: LibraryStore,
    errors: ErrorLog,
    subscribers: Vec<Sender<LibraryEvent>>,
}

impl Library {
    /// Open the library stored at `store`, keeping up to `history_limit`
    /// errors in memory.
    pub fn open(store: LibraryStore, history_limit: usize) -> Result<Self> {
        let prompts = store.load()?;
        let mut library = Self {
            state: LibraryState::default(),
            store,
            errors: ErrorLog::with_capacity(history_limit),
            subscribers: Vec::new(),
        };
        library.dispatch(Action::Load(prompts))?;
        Ok(library)
    }

    pub fn from_config(cfg: &ResolvedConfig) -> Result<Self> {
        Self::open(LibraryStore::new(&cfg.library_file), cfg.history_limit)
    }

    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.state.prompts
    }

    pub fn store(&self) -> &LibraryStore {
        &self.store
    }

    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    /// Receive a [`LibraryEvent`] for every change applied from now on.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<LibraryEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Apply an action, persist the result, and notify subscribers.
    ///
    /// `Load` is not written back to storage. On a storage failure the
    /// in-memory state is left untouched and the error is recorded.
    pub fn dispatch(&mut self, action: Action) -> Result<LibraryEvent> {
        let kind = action.kind();
        let event = self.describe(&action);
        let persist = !matches!(action, Action::Load(_));

        let next = reduce(&self.state, action);

        if persist {
            if let Err(e) = self.store.save(&next.prompts) {
                self.errors.record(format!("storage.save ({kind})"), &e);
                return Err(e.into());
            }
        }

        debug!("Applied {} action, {} prompts", kind, next.len());
        self.state = next;
        self.notify(&event);
        Ok(event)
    }

    fn describe(&self, action: &Action) -> LibraryEvent {
        match action {
            Action::Load(prompts) => LibraryEvent::Loaded { count: prompts.len() },
            Action::Add(p) => LibraryEvent::Added { id: p.id.clone() },
            Action::Update(p) => LibraryEvent::Updated { id: p.id.clone() },
            Action::Delete(id) => LibraryEvent::Deleted { id: id.clone() },
            Action::Import(prompts) => {
                let mut seen = std::collections::HashSet::new();
                let mut added = 0;
                let mut replaced = 0;
                for p in prompts {
                    if !seen.insert(p.id.as_str()) {
                        continue;
                    }
                    if self.state.contains(&p.id) {
                        replaced += 1;
                    } else {
                        added += 1;
                    }
                }
                LibraryEvent::Imported { added, replaced }
            }
        }
    }

    fn notify(&mut self, event: &LibraryEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.state.get(id)
    }

    pub fn query(&self, query: &PromptQuery) -> Page<&Prompt> {
        run_query(&self.state.prompts, query)
    }

    /// Validate a draft and store it under a freshly generated ID.
    pub fn add(&mut self, draft: PromptDraft) -> Result<Prompt> {
        draft.validate()?;
        let Some(id) = generate_prompt_id(&self.state.prompts) else {
            self.errors.record("add", LibraryError::IdsExhausted);
            return Err(LibraryError::IdsExhausted);
        };
        let prompt = Prompt::from_draft(id, draft);
        self.dispatch(Action::Add(prompt.clone()))?;
        info!("Added prompt {}", prompt.id);
        Ok(prompt)
    }

    pub fn update(&mut self, id: &str, patch: &PromptPatch) -> Result<Prompt> {
        let current =
            self.state.get(id).ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        let updated = current.apply_patch(patch)?;
        self.dispatch(Action::Update(updated.clone()))?;
        info!("Updated prompt {}", id);
        Ok(updated)
    }

    /// Remove a prompt, returning what was removed.
    pub fn delete(&mut self, id: &str) -> Result<Prompt> {
        let removed = self
            .state
            .get(id)
            .cloned()
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        self.dispatch(Action::Delete(id.to_string()))?;
        info!("Deleted prompt {}", id);
        Ok(removed)
    }

    /// Merge already-validated prompts by ID.
    pub fn import(&mut self, prompts: Vec<Prompt>) -> Result<LibraryEvent> {
        self.dispatch(Action::Import(prompts))
    }

    /// Parse an import file and merge it into the library.
    pub fn import_json(&mut self, input: &str) -> Result<LibraryEvent> {
        let prompts = match parse_import(input, &self.state.prompts) {
            Ok(p) => p,
            Err(e) => {
                self.errors.record("import", &e);
                return Err(e.into());
            }
        };
        self.import(prompts)
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(export_json(&self.state.prompts)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::Category;
    use tempfile::tempdir;

    fn open(dir: &std::path::Path) -> Library {
        Library::open(LibraryStore::new(dir.join("library.json")), 10).unwrap()
    }

    #[test]
    fn test_add_persists_and_notifies() {
        let tmp = tempdir().unwrap();
        let mut library = open(tmp.path());
        let events = library.subscribe();

        let prompt = library
            .add(PromptDraft::new("Greeting", "Hello {name}", Category::Writing))
            .unwrap();

        assert_eq!(prompt.id, "PRM-001");
        assert_eq!(events.try_recv().unwrap(), LibraryEvent::Added { id: "PRM-001".into() });

        let reopened = open(tmp.path());
        assert_eq!(reopened.prompts(), &[prompt]);
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let tmp = tempdir().unwrap();
        let mut library = open(tmp.path());
        let err = library.add(PromptDraft::new("", "body", Category::Other)).unwrap_err();
        assert!(matches!(err, LibraryError::Invalid(PromptError::EmptyTitle)));
        assert!(!library.store().exists());
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let tmp = tempdir().unwrap();
        let mut library = open(tmp.path());
        assert!(matches!(
            library.update("PRM-404", &PromptPatch::default()),
            Err(LibraryError::NotFound(_))
        ));
        assert!(matches!(library.delete("PRM-404"), Err(LibraryError::NotFound(_))));
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let tmp = tempdir().unwrap();
        let mut library = open(tmp.path());
        drop(library.subscribe());
        let live = library.subscribe();

        library.add(PromptDraft::new("a", "b", Category::Other)).unwrap();

        assert_eq!(library.subscribers.len(), 1);
        assert!(live.try_recv().is_ok());
    }

    #[test]
    fn test_failed_import_is_recorded() {
        let tmp = tempdir().unwrap();
        let mut library = open(tmp.path());
        assert!(library.import_json("not json").is_err());
        assert_eq!(library.errors().len(), 1);
        assert_eq!(library.errors().latest().unwrap().context, "import");
    }

    #[test]
    fn test_add_after_max_id_import_fails_without_duplicate() {
        let tmp = tempdir().unwrap();
        let mut library = open(tmp.path());
        library
            .import_json(r#"[{"id": "PRM-4294967295", "title": "Last", "content": "x"}]"#)
            .unwrap();

        let err = library.add(PromptDraft::new("Next", "y", Category::Other)).unwrap_err();

        assert!(matches!(err, LibraryError::IdsExhausted));
        let ids: Vec<_> = library.prompts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["PRM-4294967295"]);
        assert_eq!(library.errors().latest().unwrap().context, "add");
        assert_eq!(open(tmp.path()).prompts().len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_state_and_records_error() {
        let tmp = tempdir().unwrap();
        // A directory where the library file should be makes the rename fail.
        let path = tmp.path().join("library.json");
        std::fs::create_dir_all(path.join("occupied")).unwrap();

        let mut library = Library {
            state: LibraryState::default(),
            store: LibraryStore::new(&path),
            errors: ErrorLog::with_capacity(5),
            subscribers: Vec::new(),
        };

        let err = library.add(PromptDraft::new("a", "b", Category::Other)).unwrap_err();
        assert!(matches!(err, LibraryError::Storage(_)));
        assert!(library.state().is_empty());
        assert!(library.errors().latest().unwrap().context.starts_with("storage.save"));
    }
}
