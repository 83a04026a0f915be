//! In-memory list stores backing the task and note screens.
//!
//! # Responsibility
//! - Hold one screen's ordered item collection.
//! - Apply add/update/remove/toggle by key and derive search views.
//!
//! # Invariants
//! - Keys are unique within a store.
//! - Iteration order is insertion order.
//! - Invalid input (blank text, unknown key) is a no-op, never an error.

pub mod list_store;
pub mod task_store;

use crate::model::item::NoteItem;

pub use list_store::{ListStore, Search};
pub use task_store::TaskListStore;

/// Store for the notes screen. Notes have no completion state.
pub type NoteListStore = ListStore<NoteItem>;
