//! Generic ordered item store.
//!
//! # Responsibility
//! - Implement the CRUD and search contract shared by every list screen.
//! - Emit metadata-only diagnostics; item text is never logged.
//!
//! # Invariants
//! - `add` rejects text that is blank after trim, but stores accepted text
//!   untrimmed.
//! - `update` replaces only `value`; other fields keep their state.
//! - `search` preserves collection order.

use crate::model::item::{ItemKey, ListItem};
use log::debug;

/// Ordered, in-memory collection of list items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStore<T> {
    items: Vec<T>,
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: ListItem> ListStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new item built from `text`.
    ///
    /// Returns the generated key, or `None` when `text` is blank after trim.
    pub fn add(&mut self, text: impl Into<String>) -> Option<ItemKey> {
        let text = text.into();
        if text.trim().is_empty() {
            debug!(
                "event=item_add module=store status=skipped kind={} reason=blank_text",
                T::KIND
            );
            return None;
        }

        let item = T::from_value(text);
        let key = item.key();
        self.items.push(item);
        debug!(
            "event=item_add module=store status=ok kind={} count={}",
            T::KIND,
            self.items.len()
        );
        Some(key)
    }

    /// Replaces the value of the item identified by `key`.
    ///
    /// Returns `false` when no item matches.
    pub fn update(&mut self, key: ItemKey, text: impl Into<String>) -> bool {
        match self.get_mut(key) {
            Some(item) => {
                item.set_value(text.into());
                debug!(
                    "event=item_update module=store status=ok kind={} key={key}",
                    T::KIND
                );
                true
            }
            None => {
                debug!(
                    "event=item_update module=store status=skipped kind={} reason=unknown_key",
                    T::KIND
                );
                false
            }
        }
    }

    /// Removes the item identified by `key`.
    ///
    /// Returns `false` when no item matches.
    pub fn remove(&mut self, key: ItemKey) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.key() != key);
        let removed = self.items.len() != before;
        debug!(
            "event=item_remove module=store status={} kind={} count={}",
            if removed { "ok" } else { "skipped" },
            T::KIND,
            self.items.len()
        );
        removed
    }

    /// Lazily yields items whose value contains `query`, ignoring case.
    ///
    /// An empty query yields every item.
    pub fn search<'a>(&'a self, query: &str) -> Search<'a, T> {
        Search {
            inner: self.items.iter(),
            needle: query.to_lowercase(),
        }
    }

    /// Looks up one item by key.
    pub fn get(&self, key: ItemKey) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub(crate) fn get_mut(&mut self, key: ItemKey) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Iterator returned by [`ListStore::search`].
#[derive(Debug, Clone)]
pub struct Search<'a, T> {
    inner: std::slice::Iter<'a, T>,
    needle: String,
}

impl<'a, T: ListItem> Iterator for Search<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.needle.is_empty() {
            return self.inner.next();
        }
        let needle = self.needle.as_str();
        self.inner
            .find(|item| item.value().to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::ListStore;
    use crate::model::item::NoteItem;

    #[test]
    fn add_keeps_untrimmed_text() {
        let mut store = ListStore::<NoteItem>::new();
        let key = store.add("  padded  ").expect("non-blank text should add");
        assert_eq!(store.get(key).map(|note| note.value.as_str()), Some("  padded  "));
    }

    #[test]
    fn search_does_not_trim_query() {
        let mut store = ListStore::<NoteItem>::new();
        store.add("alpha beta");
        store.add("alphabet");

        let hits = store.search(" beta").collect::<Vec<_>>();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value, "alpha beta");
    }

    #[test]
    fn search_is_lazy_over_borrowed_items() {
        let mut store = ListStore::<NoteItem>::new();
        store.add("one");
        store.add("two");
        store.add("three");

        let mut search = store.search("t");
        assert_eq!(search.next().map(|note| note.value.as_str()), Some("two"));
        assert_eq!(search.next().map(|note| note.value.as_str()), Some("three"));
        assert!(search.next().is_none());
    }
}
