//! Versioned on-disk persistence for the prompt library.
//!
//! The library is a single JSON document, by default
//! `<data_dir>/library.json`:
//!
//! ```json
//! { "version": 1, "prompts": [ ... ] }
//! ```

mod store;

pub use store::{LibraryStore, STORAGE_VERSION, StorageError, StoredLibrary};
