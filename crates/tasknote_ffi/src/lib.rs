//! Flutter-facing bindings for TaskNote core.

pub mod api;
