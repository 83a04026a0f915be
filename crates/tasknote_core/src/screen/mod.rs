//! Screen-level state driven by the host UI.
//!
//! # Responsibility
//! - Model the add/edit modal flow each list screen runs over its store.
//! - Group a store with its search query and editor so bindings hold one value.
//!
//! # Invariants
//! - The editor never writes to a store unless its draft is non-blank.
//! - Search views always reflect the current query over the current store.

pub mod editor;
pub mod list_screen;

pub use editor::{EditorMode, ListEditor, SubmitOutcome};
pub use list_screen::{ListScreen, NoteScreen, TaskScreen};
