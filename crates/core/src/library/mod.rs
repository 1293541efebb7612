//! Prompt collection state and the commands that change it.
//!
//! State is an immutable [`LibraryState`] value. Every change goes through
//! [`reduce`] with an [`Action`]; [`Library`] wraps that with persistence,
//! error history, and change notifications.

mod action;
mod reducer;
mod service;

pub use action::{Action, LibraryEvent};
pub use reducer::{LibraryState, reduce};
pub use service::{Library, LibraryError};
