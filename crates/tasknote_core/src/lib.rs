//! Core domain logic for the TaskNote task and note screens.
//! This crate owns list state and its invariants; UI layers only bind to it.

pub mod logging;
pub mod model;
pub mod screen;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::item::{
    parse_item_key, ItemKey, KeyParseError, ListItem, NoteItem, TaskItem,
};
pub use screen::{EditorMode, ListEditor, ListScreen, NoteScreen, SubmitOutcome, TaskScreen};
pub use store::{ListStore, NoteListStore, Search, TaskListStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
