use crate::prompts::Prompt;

/// A change to the prompt collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the whole collection (initial load from storage).
    Load(Vec<Prompt>),
    Add(Prompt),
    /// Replace the prompt with the same ID.
    Update(Prompt),
    /// Remove the prompt with this ID.
    Delete(String),
    /// Merge prompts from an import file.
    Import(Vec<Prompt>),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Load(_) => "load",
            Action::Add(_) => "add",
            Action::Update(_) => "update",
            Action::Delete(_) => "delete",
            Action::Import(_) => "import",
        }
    }
}

/// Notification sent to subscribers after an action has been applied and
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEvent {
    Loaded { count: usize },
    Added { id: String },
    Updated { id: String },
    Deleted { id: String },
    Imported { added: usize, replaced: usize },
}
