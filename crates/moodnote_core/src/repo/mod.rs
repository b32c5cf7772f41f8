//! Note store abstractions and implementations.
//!
//! # Responsibility
//! - Define the store contract used by draft commits and browse/delete flows.
//! - Keep storage details out of service orchestration.
//!
//! # Invariants
//! - Stores trust callers for content validation; blank drafts are filtered
//!   before they reach `upsert`.

pub mod note_repo;
