//! Core library for promptlib.
//!
//! The heart of the crate is the variable engine: [`vars`] extracts the
//! `{name}` placeholders a template references and [`templates`] substitutes
//! values back in. Around it sit the pieces of a small prompt library:
//! records, a reducer-driven collection, search and pagination, versioned
//! storage, JSON import/export, and a bounded error history.

pub mod config;
pub mod diagnostics;
pub mod ids;
pub mod library;
pub mod prompts;
pub mod query;
pub mod storage;
pub mod templates;
pub mod transfer;
pub mod vars;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
