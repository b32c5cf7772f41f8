//! Core domain logic for MoodNote.
//! This crate is the single source of truth for note lifecycle invariants.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{SessionConfig, DEFAULT_AUTOSAVE_DELAY_MS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::mood::{display_of, Mood, MoodDisplay};
pub use model::note::{derive_preview, derive_title, Note, NoteId, NoteIdParseError, UNTITLED};
pub use repo::note_repo::{group_by_mood, InMemoryNoteRepository, NoteRepository, UpsertOutcome};
pub use service::debounce::DebounceTimer;
pub use service::draft_service::{CommitOutcome, DraftController, DraftError};
pub use service::session_service::{
    DraftSnapshot, NoteCard, NoteGroup, Session, SessionError, SessionSnapshot, View,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
