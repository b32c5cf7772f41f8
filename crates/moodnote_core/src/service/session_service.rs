//! Session use-case service: view state and intent routing.
//!
//! # Responsibility
//! - Track the active view (`Composing` / `Browsing`) and selected mood.
//! - Route presentation intents to the draft controller or the note store.
//! - Drive debounce expiry from the injected clock on `tick`.
//! - Produce render snapshots and a revision counter for re-render signals.
//!
//! # Invariants
//! - A session starts in `Composing`. When its store is empty at
//!   construction, one blank draft is started with the configured mood; this
//!   bootstrap runs once per session.
//! - Store and draft are decoupled: deleting a note never alters the draft,
//!   and the draft reaches the store only through the debounced commit.
//! - Switching to `Browsing` keeps pending commits running.
//! - Every intent fires an already-elapsed commit before acting, so only
//!   timers still running can be cancelled by a draft switch or teardown.

use crate::clock::Clock;
use crate::config::SessionConfig;
use crate::model::mood::{Mood, MoodDisplay};
use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::service::draft_service::{CommitOutcome, DraftController, DraftError};
use log::{debug, error, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// High-level screen the presentation layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Composing,
    Browsing,
}

/// Errors surfaced to session callers. All of them are caller bugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Draft-level contract violation.
    Draft(DraftError),
    /// `select_note` named an id the store does not hold.
    NoteNotFound(NoteId),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Draft(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<DraftError> for SessionError {
    fn from(value: DraftError) -> Self {
        Self::Draft(value)
    }
}

/// Render model for the active draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSnapshot {
    pub id: NoteId,
    pub content: String,
    pub title: String,
    pub mood: Mood,
    pub timestamp: i64,
    pub pending_commit: bool,
}

/// Render model for one browse card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub preview: String,
    pub age: String,
    pub timestamp: i64,
}

/// Render model for one mood section of the browse view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteGroup {
    pub mood: Mood,
    pub display: MoodDisplay,
    pub notes: Vec<NoteCard>,
}

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub revision: u64,
    pub view: View,
    pub selected_mood: Mood,
    pub draft: Option<DraftSnapshot>,
    /// Groups in catalog order; empty moods are omitted.
    pub groups: Vec<NoteGroup>,
}

/// One note-taking session.
///
/// Owns its store, draft controller and clock explicitly, so independent
/// sessions never share state.
pub struct Session<R: NoteRepository, C: Clock> {
    repo: R,
    drafts: DraftController,
    clock: C,
    config: SessionConfig,
    view: View,
    selected_mood: Mood,
    revision: u64,
}

impl<R: NoteRepository, C: Clock> Session<R, C> {
    /// Creates a session over the provided store and clock.
    pub fn new(repo: R, clock: C, config: SessionConfig) -> Self {
        let mut session = Self {
            repo,
            drafts: DraftController::new(config.autosave_delay()),
            clock,
            config,
            view: View::Composing,
            selected_mood: config.default_mood,
            revision: 0,
        };
        if session.repo.is_empty() {
            let now = session.clock.now_millis();
            session.drafts.start_new(session.selected_mood, now);
        }
        info!(
            "event=session_start module=session status=ok notes={} autosave_delay_ms={}",
            session.repo.len(),
            config.autosave_delay_ms
        );
        session
    }

    /// "New note" intent: starts a blank draft in the selected mood.
    pub fn new_note(&mut self) -> NoteId {
        self.flush_due();
        let now = self.clock.now_millis();
        let id = self.drafts.start_new(self.selected_mood, now).id();
        self.view = View::Composing;
        self.bump();
        id
    }

    /// "Edit draft" intent.
    ///
    /// # Errors
    /// - `SessionError::Draft(NoActiveDraft)` when no draft exists.
    pub fn edit_draft(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.flush_due();
        let now = self.clock.now_millis();
        self.drafts.edit(text, now)?;
        self.bump();
        Ok(())
    }

    /// "Change mood" intent: updates the selected mood and the active draft.
    pub fn set_mood(&mut self, mood: Mood) {
        self.flush_due();
        self.selected_mood = mood;
        if !self.drafts.set_mood(mood) {
            debug!("event=mood_select module=session status=ok draft=none mood={mood}");
        }
        self.bump();
    }

    /// "Switch view" intent. Browsing keeps pending commits alive; composing
    /// resumes whatever draft is active.
    pub fn switch_view(&mut self, target: View) {
        self.flush_due();
        if self.view != target {
            self.view = target;
            self.bump();
        }
    }

    /// "Select note" intent: loads a copy of a stored note into the draft.
    ///
    /// # Errors
    /// - `SessionError::NoteNotFound` when the store has no such id.
    pub fn select_note(&mut self, id: NoteId) -> Result<(), SessionError> {
        self.flush_due();
        let Some(note) = self.repo.get(id) else {
            error!("event=note_select module=session status=error reason=not_found note_id={id}");
            return Err(SessionError::NoteNotFound(id));
        };
        self.selected_mood = note.mood();
        self.drafts.load(note);
        self.view = View::Composing;
        self.bump();
        Ok(())
    }

    /// "Delete note" intent. Unknown ids are a no-op; the draft is never
    /// touched, even when it was loaded from the deleted note.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        self.flush_due();
        let removed = self.repo.remove(id);
        if removed {
            info!("event=note_delete module=session status=ok note_id={id}");
            self.bump();
        }
        removed
    }

    /// Timer entry point: commits the draft when its quiet period elapsed.
    pub fn tick(&mut self) -> Option<CommitOutcome> {
        self.flush_due()
    }

    /// Session teardown: commits a draft whose quiet period already elapsed,
    /// then cancels any commit still waiting so it cannot fire later.
    pub fn shutdown(&mut self) -> bool {
        self.flush_due();
        let cancelled = self.drafts.cancel_pending();
        info!("event=session_shutdown module=session status=ok cancelled_commit={cancelled}");
        cancelled
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_mood(&self) -> Mood {
        self.selected_mood
    }

    pub fn draft(&self) -> Option<&Note> {
        self.drafts.active()
    }

    pub fn has_pending_commit(&self) -> bool {
        self.drafts.has_pending_commit()
    }

    /// Epoch ms at which the next `tick` would commit, if any.
    pub fn next_tick_deadline(&self) -> Option<i64> {
        self.drafts.pending_deadline()
    }

    pub fn notes(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Monotonic counter bumped on every observable state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Builds the full render model.
    ///
    /// Read-only: an elapsed but unticked commit shows up after the next
    /// `tick` or intent.
    pub fn snapshot(&self) -> SessionSnapshot {
        let now = self.clock.now_millis();
        let draft = self.drafts.active().map(|note| DraftSnapshot {
            id: note.id(),
            content: note.content().to_string(),
            title: note.title().to_string(),
            mood: note.mood(),
            timestamp: note.timestamp(),
            pending_commit: self.drafts.has_pending_commit(),
        });
        let groups = self
            .repo
            .group_by_mood()
            .into_iter()
            .map(|(mood, notes)| NoteGroup {
                mood,
                display: mood.display(),
                notes: notes
                    .iter()
                    .map(|note| NoteCard {
                        id: note.id(),
                        title: note.title().to_string(),
                        preview: note.preview(),
                        age: note.age_label(now),
                        timestamp: note.timestamp(),
                    })
                    .collect(),
            })
            .collect();

        SessionSnapshot {
            revision: self.revision,
            view: self.view,
            selected_mood: self.selected_mood,
            draft,
            groups,
        }
    }

    /// Fires an elapsed commit before an intent can cancel or shadow it.
    fn flush_due(&mut self) -> Option<CommitOutcome> {
        let now = self.clock.now_millis();
        let outcome = self.drafts.poll(now, &mut self.repo);
        if matches!(outcome, Some(CommitOutcome::Committed { .. })) {
            self.bump();
        }
        outcome
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
