//! Domain model for the task and note list screens.
//!
//! # Responsibility
//! - Define the item records held by list stores.
//! - Provide the shared `ListItem` contract generic store code relies on.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemKey`.
//! - Items have no soft-delete state; removal is final.

pub mod item;
