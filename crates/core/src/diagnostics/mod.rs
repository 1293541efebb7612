//! Bounded in-memory error history.
//!
//! The history is owned by whoever composes the application (the
//! [`Library`](crate::library::Library) by default). Nothing here is global.

mod log;

pub use log::{DEFAULT_HISTORY_LIMIT, ErrorEntry, ErrorLog};
