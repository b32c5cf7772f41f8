//! Flutter-facing bindings for MoodNote core.

pub mod api;
