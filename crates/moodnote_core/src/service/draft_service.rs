//! Draft use-case service.
//!
//! # Responsibility
//! - Own the single active note while the user composes.
//! - Apply edits and mood changes to the active note.
//! - Commit the active note to a store through one debounced autosave.
//!
//! # Invariants
//! - At most one active draft and at most one pending commit.
//! - Every `edit` re-arms the commit timer; bursts collapse to one commit
//!   carrying the latest content.
//! - Blank (whitespace-only) drafts are never written to the store.
//! - Switching drafts (`start_new`/`load`) cancels the previous pending
//!   commit without committing it.

use crate::model::mood::Mood;
use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteRepository, UpsertOutcome};
use crate::service::debounce::DebounceTimer;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Caller-contract violations reported by the draft controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// A draft operation was called before any draft was started or loaded.
    NoActiveDraft,
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveDraft => write!(f, "no active draft"),
        }
    }
}

impl Error for DraftError {}

/// Result of one debounce expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The draft was written to the store.
    Committed { id: NoteId, upsert: UpsertOutcome },
    /// The draft was blank; the store was left untouched.
    SkippedBlank { id: NoteId },
}

/// Controller for the one note currently being composed.
#[derive(Debug, Clone)]
pub struct DraftController {
    active: Option<Note>,
    timer: DebounceTimer,
}

impl DraftController {
    pub fn new(autosave_delay: Duration) -> Self {
        Self {
            active: None,
            timer: DebounceTimer::new(autosave_delay),
        }
    }

    /// Starts a fresh empty draft and makes it active.
    ///
    /// The draft is not written to any store until a non-blank commit.
    pub fn start_new(&mut self, mood: Mood, now_ms: i64) -> &Note {
        self.drop_pending("start_new");
        let note = Note::new(NoteId::generate(now_ms), mood, now_ms);
        debug!(
            "event=draft_start module=draft status=ok note_id={} mood={}",
            note.id(),
            mood
        );
        self.active.insert(note)
    }

    /// Replaces the active draft with a copy of a committed note.
    pub fn load(&mut self, note: &Note) -> &Note {
        self.drop_pending("load");
        debug!(
            "event=draft_load module=draft status=ok note_id={}",
            note.id()
        );
        self.active.insert(note.clone())
    }

    /// Replaces the active content, re-deriving the title and re-arming the
    /// autosave timer.
    ///
    /// # Errors
    /// - `DraftError::NoActiveDraft` when no draft exists.
    pub fn edit(&mut self, content: impl Into<String>, now_ms: i64) -> Result<(), DraftError> {
        let Some(note) = self.active.as_mut() else {
            error!("event=draft_edit module=draft status=error reason=no_active_draft");
            return Err(DraftError::NoActiveDraft);
        };
        note.set_content(content);
        self.timer.arm(now_ms);
        Ok(())
    }

    /// Changes only the active draft's mood. Returns `false` when there is
    /// no draft to retag.
    ///
    /// Does not arm the timer; a commit already pending picks the new mood up
    /// when it fires.
    pub fn set_mood(&mut self, mood: Mood) -> bool {
        match self.active.as_mut() {
            Some(note) => {
                note.set_mood(mood);
                true
            }
            None => false,
        }
    }

    /// Fires the pending commit when its deadline has passed.
    ///
    /// Returns `None` when nothing was due.
    pub fn poll(&mut self, now_ms: i64, repo: &mut impl NoteRepository) -> Option<CommitOutcome> {
        if !self.timer.fire_if_due(now_ms) {
            return None;
        }
        let note = self.active.as_ref()?;
        let id = note.id();
        if !note.has_content() {
            debug!("event=draft_commit module=draft status=skip reason=blank note_id={id}");
            return Some(CommitOutcome::SkippedBlank { id });
        }
        let upsert = repo.upsert(note.clone());
        info!("event=draft_commit module=draft status=ok note_id={id} upsert={upsert:?}");
        Some(CommitOutcome::Committed { id, upsert })
    }

    /// Cancels the pending commit, if any, without committing.
    pub fn cancel_pending(&mut self) -> bool {
        self.timer.cancel()
    }

    pub fn has_pending_commit(&self) -> bool {
        self.timer.is_armed()
    }

    /// Deadline of the pending commit in epoch ms, for hosts scheduling the
    /// next poll.
    pub fn pending_deadline(&self) -> Option<i64> {
        self.timer.deadline_ms()
    }

    pub fn active(&self) -> Option<&Note> {
        self.active.as_ref()
    }

    fn drop_pending(&mut self, reason: &str) {
        if self.timer.cancel() {
            debug!("event=draft_commit module=draft status=cancelled reason={reason}");
        }
    }
}
