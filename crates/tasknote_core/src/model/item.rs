//! List item records.
//!
//! # Responsibility
//! - Define `TaskItem` and `NoteItem` plus their stable key type.
//! - Parse keys coming back from UI bindings.
//!
//! # Invariants
//! - `key` is assigned at creation and never reassigned.
//! - `completed` on tasks changes only through toggling.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one list item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemKey = Uuid;

/// Error returned when a key string from a UI binding is not a valid key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    /// Input is blank after trim.
    Empty,
    /// Input is not a UUID.
    Malformed { input: String, message: String },
    /// Nil UUID never identifies an item.
    Nil,
}

impl Display for KeyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "item key must not be empty"),
            Self::Malformed { input, message } => {
                write!(f, "invalid item key `{input}`: {message}")
            }
            Self::Nil => write!(f, "item key must not be nil"),
        }
    }
}

impl Error for KeyParseError {}

/// Parses a key previously handed out by a store.
pub fn parse_item_key(raw: &str) -> Result<ItemKey, KeyParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(KeyParseError::Empty);
    }
    let key = Uuid::parse_str(trimmed).map_err(|err| KeyParseError::Malformed {
        input: trimmed.to_string(),
        message: err.to_string(),
    })?;
    if key.is_nil() {
        return Err(KeyParseError::Nil);
    }
    Ok(key)
}

/// Common shape of anything a list store can hold.
pub trait ListItem {
    /// Label used in diagnostics (`task` or `note`).
    const KIND: &'static str;

    /// Builds a fresh item with a generated key.
    fn from_value(value: String) -> Self;
    fn key(&self) -> ItemKey;
    fn value(&self) -> &str;
    fn set_value(&mut self, value: String);
}

/// One entry of the task list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub key: ItemKey,
    /// Task text as entered, untrimmed.
    pub value: String,
    pub completed: bool,
}

impl TaskItem {
    /// Creates an open task with a generated key.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            key: Uuid::new_v4(),
            value: value.into(),
            completed: false,
        }
    }

    /// Flips completion and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

impl ListItem for TaskItem {
    const KIND: &'static str = "task";

    fn from_value(value: String) -> Self {
        Self::new(value)
    }

    fn key(&self) -> ItemKey {
        self.key
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// One entry of the notes screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
    pub key: ItemKey,
    pub value: String,
}

impl NoteItem {
    /// Creates a note with a generated key.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            key: Uuid::new_v4(),
            value: value.into(),
        }
    }
}

impl ListItem for NoteItem {
    const KIND: &'static str = "note";

    fn from_value(value: String) -> Self {
        Self::new(value)
    }

    fn key(&self) -> ItemKey {
        self.key
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}
