//! Add/edit modal flow.
//!
//! # Responsibility
//! - Track draft text, edit target and visibility for one screen.
//! - Route a submitted draft to `add` or `update` on the owning store.
//!
//! # Invariants
//! - Blank drafts are ignored and keep the editor open.
//! - Any accepted submit or cancel resets to a hidden, empty create editor.

use crate::model::item::{ItemKey, ListItem};
use crate::store::ListStore;
use log::debug;

/// What a submit will do with the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Draft becomes a new item.
    #[default]
    Create,
    /// Draft replaces the value of an existing item.
    Edit(ItemKey),
}

/// Result of [`ListEditor::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was blank; nothing changed and the editor stays open.
    Ignored,
    /// A new item was appended.
    Added(ItemKey),
    /// An existing item got the draft as its value.
    Updated(ItemKey),
    /// The edit target was removed before submit; the editor still closes.
    Stale(ItemKey),
}

/// Editor state for one list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEditor {
    mode: EditorMode,
    draft: String,
    visible: bool,
}

impl ListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows an empty editor for a new item.
    pub fn open_create(&mut self) {
        self.reset();
        self.visible = true;
    }

    /// Shows the editor targeting `key`, preloaded with its current value.
    pub fn open_edit(&mut self, key: ItemKey, value: impl Into<String>) {
        self.mode = EditorMode::Edit(key);
        self.draft = value.into();
        self.visible = true;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Applies the draft to `store` according to the current mode.
    pub fn submit<T: ListItem>(&mut self, store: &mut ListStore<T>) -> SubmitOutcome {
        if self.draft.trim().is_empty() {
            debug!(
                "event=editor_submit module=screen status=skipped kind={} reason=blank_draft",
                T::KIND
            );
            return SubmitOutcome::Ignored;
        }

        let draft = std::mem::take(&mut self.draft);
        let outcome = match self.mode {
            EditorMode::Create => match store.add(draft) {
                Some(key) => SubmitOutcome::Added(key),
                None => SubmitOutcome::Ignored,
            },
            EditorMode::Edit(key) => {
                if store.update(key, draft) {
                    SubmitOutcome::Updated(key)
                } else {
                    SubmitOutcome::Stale(key)
                }
            }
        };
        self.reset();
        outcome
    }

    /// Discards the draft and hides the editor.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Hides the editor but keeps mode and draft, as a dismissed modal does.
    ///
    /// A later `open_edit` or `open_create` replaces the kept state.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Key being edited, if the editor is in edit mode.
    pub fn editing_key(&self) -> Option<ItemKey> {
        match self.mode {
            EditorMode::Create => None,
            EditorMode::Edit(key) => Some(key),
        }
    }

    fn reset(&mut self) {
        self.mode = EditorMode::Create;
        self.draft.clear();
        self.visible = false;
    }
}
