//! Domain model for mood-tagged notes.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep mood display metadata in one catalog instead of per-view tables.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod mood;
pub mod note;
