use std::collections::HashMap;

use crate::prompts::Prompt;

use super::action::Action;

/// Snapshot of the prompt collection, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryState {
    pub prompts: Vec<Prompt>,
}

impl LibraryState {
    pub fn new(prompts: Vec<Prompt>) -> Self {
        Self { prompts }
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

/// Compute the state that results from applying `action` to `state`.
///
/// Updates and deletes for unknown IDs leave the state unchanged. An update
/// never changes the stored `created_at`. Imports replace prompts with
/// matching IDs in place and append the rest in file order.
pub fn reduce(state: &LibraryState, action: Action) -> LibraryState {
    match action {
        Action::Load(prompts) => LibraryState { prompts },

        Action::Add(prompt) => {
            let mut prompts = state.prompts.clone();
            prompts.push(prompt);
            LibraryState { prompts }
        }

        Action::Update(updated) => {
            let prompts = state
                .prompts
                .iter()
                .map(|p| {
                    if p.id == updated.id {
                        Prompt { created_at: p.created_at, ..updated.clone() }
                    } else {
                        p.clone()
                    }
                })
                .collect();
            LibraryState { prompts }
        }

        Action::Delete(id) => {
            let prompts = state.prompts.iter().filter(|p| p.id != id).cloned().collect();
            LibraryState { prompts }
        }

        Action::Import(imported) => {
            let mut prompts = state.prompts.clone();
            let mut index: HashMap<String, usize> =
                prompts.iter().enumerate().map(|(i, p)| (p.id.clone(), i)).collect();

            for prompt in imported {
                match index.get(&prompt.id) {
                    Some(&i) => prompts[i] = prompt,
                    None => {
                        index.insert(prompt.id.clone(), prompts.len());
                        prompts.push(prompt);
                    }
                }
            }
            LibraryState { prompts }
        }
    }
}
