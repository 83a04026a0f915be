//! One list screen: store, search query and editor.
//!
//! # Responsibility
//! - Give UI bindings a single value to hold per screen.
//! - Derive the visible item list from the current query.

use crate::model::item::{ItemKey, ListItem, NoteItem, TaskItem};
use crate::screen::editor::{ListEditor, SubmitOutcome};
use crate::store::{ListStore, Search};

/// State behind one list screen.
#[derive(Debug, Clone)]
pub struct ListScreen<T> {
    store: ListStore<T>,
    query: String,
    editor: ListEditor,
}

/// Task list screen.
pub type TaskScreen = ListScreen<TaskItem>;
/// Notes screen.
pub type NoteScreen = ListScreen<NoteItem>;

impl<T> Default for ListScreen<T> {
    fn default() -> Self {
        Self {
            store: ListStore::default(),
            query: String::new(),
            editor: ListEditor::default(),
        }
    }
}

impl<T: ListItem> ListScreen<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ListStore<T> {
        &self.store
    }

    /// Direct store access for bindings that bypass the editor.
    pub fn store_mut(&mut self) -> &mut ListStore<T> {
        &mut self.store
    }

    pub fn editor(&self) -> &ListEditor {
        &self.editor
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Items matching the current query, in store order.
    pub fn visible_items(&self) -> Search<'_, T> {
        self.store.search(&self.query)
    }

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    /// Opens the editor preloaded with the value stored under `key`.
    ///
    /// Returns `false` and leaves the editor untouched when `key` is unknown.
    pub fn begin_edit(&mut self, key: ItemKey) -> bool {
        match self.store.get(key) {
            Some(item) => {
                self.editor.open_edit(key, item.value());
                true
            }
            None => false,
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.editor.set_draft(text);
    }

    pub fn submit_editor(&mut self) -> SubmitOutcome {
        self.editor.submit(&mut self.store)
    }

    pub fn cancel_editor(&mut self) {
        self.editor.cancel();
    }

    /// Dismisses the editor without discarding its draft.
    pub fn hide_editor(&mut self) {
        self.editor.hide();
    }

    pub fn remove(&mut self, key: ItemKey) -> bool {
        self.store.remove(key)
    }
}

impl ListScreen<TaskItem> {
    pub fn toggle_complete(&mut self, key: ItemKey) -> Option<bool> {
        self.store.toggle_complete(key)
    }
}
