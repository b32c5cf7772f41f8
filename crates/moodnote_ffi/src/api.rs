//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the session intents (new/edit/mood/view/select/delete/tick) to
//!   Dart via FRB.
//! - Own the one process-wide session behind a mutex; core itself has no
//!   global state.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported in response envelopes, never thrown.
//! - Snapshots are JSON strings with the core `SessionSnapshot` shape.

use log::warn;
use moodnote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CommitOutcome, InMemoryNoteRepository, Mood, NoteId, Session, SessionConfig, SystemClock,
    View,
};
use std::sync::{Mutex, OnceLock};

type FfiSession = Session<InMemoryNoteRepository, SystemClock>;

static SESSION: OnceLock<Mutex<FfiSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Mood catalog entry for pickers and theming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodOption {
    pub id: String,
    pub label: String,
    pub glyph: String,
    pub color_hint: String,
    pub theme_hint: String,
    pub placeholder: String,
}

/// Generic response envelope for session intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionActionResponse {
    /// Whether the intent was applied.
    pub ok: bool,
    /// Note id the intent produced or touched, when there is one.
    pub note_id: Option<String>,
    /// Revision after the intent; re-render when it changed.
    pub revision: u64,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl SessionActionResponse {
    fn success(message: impl Into<String>, note_id: Option<NoteId>, revision: u64) -> Self {
        Self {
            ok: true,
            note_id: note_id.map(|id| id.to_string()),
            revision,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            revision: 0,
            message: message.into(),
        }
    }
}

/// Returns the mood catalog in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_moods() -> Vec<MoodOption> {
    Mood::list()
        .iter()
        .map(|mood| {
            let display = mood.display();
            MoodOption {
                id: mood.id().to_string(),
                label: display.label.to_string(),
                glyph: display.glyph.to_string(),
                color_hint: display.color_hint.to_string(),
                theme_hint: display.theme_hint.to_string(),
                placeholder: display.placeholder.to_string(),
            }
        })
        .collect()
}

/// Starts a blank draft in the selected mood and switches to composing.
#[flutter_rust_bridge::frb(sync)]
pub fn session_new_note() -> SessionActionResponse {
    respond("session_new_note", |session| {
        let id = session.new_note();
        Ok(("Draft started.", Some(id)))
    })
}

/// Replaces the draft text and re-arms autosave.
#[flutter_rust_bridge::frb(sync)]
pub fn session_edit_draft(text: String) -> SessionActionResponse {
    respond("session_edit_draft", |session| {
        session.edit_draft(text).map_err(|err| err.to_string())?;
        Ok(("Draft updated.", session.draft().map(|note| note.id())))
    })
}

/// Selects a mood by id; unknown ids select `calm`.
#[flutter_rust_bridge::frb(sync)]
pub fn session_set_mood(mood: String) -> SessionActionResponse {
    respond("session_set_mood", |session| {
        session.set_mood(Mood::resolve(&mood));
        Ok(("Mood updated.", None))
    })
}

/// Switches view. Accepts `compose|composing|write` and `browse|browsing`.
#[flutter_rust_bridge::frb(sync)]
pub fn session_switch_view(view: String) -> SessionActionResponse {
    let target = match parse_view(&view) {
        Some(target) => target,
        None => return SessionActionResponse::failure(format!("unknown view `{view}`")),
    };
    respond("session_switch_view", |session| {
        session.switch_view(target);
        Ok(("View switched.", None))
    })
}

/// Loads a stored note into the editor.
#[flutter_rust_bridge::frb(sync)]
pub fn session_select_note(note_id: String) -> SessionActionResponse {
    let id = match note_id.parse::<NoteId>() {
        Ok(id) => id,
        Err(err) => return SessionActionResponse::failure(err.to_string()),
    };
    respond("session_select_note", |session| {
        session.select_note(id).map_err(|err| err.to_string())?;
        Ok(("Note loaded.", Some(id)))
    })
}

/// Deletes a stored note. Unknown ids succeed as a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn session_delete_note(note_id: String) -> SessionActionResponse {
    let id = match note_id.parse::<NoteId>() {
        Ok(id) => id,
        Err(err) => return SessionActionResponse::failure(err.to_string()),
    };
    respond("session_delete_note", |session| {
        let message = if session.delete_note(id) {
            "Note deleted."
        } else {
            "Note not found; nothing deleted."
        };
        Ok((message, Some(id)))
    })
}

/// Drives the autosave timer. Call periodically (or at the deadline
/// reported by `session_next_tick_deadline`).
#[flutter_rust_bridge::frb(sync)]
pub fn session_tick() -> SessionActionResponse {
    respond("session_tick", |session| {
        Ok(match session.tick() {
            Some(CommitOutcome::Committed { id, .. }) => ("Draft saved.", Some(id)),
            Some(CommitOutcome::SkippedBlank { id }) => ("Blank draft not saved.", Some(id)),
            None => ("Nothing due.", None),
        })
    })
}

/// Epoch ms of the pending autosave, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn session_next_tick_deadline() -> Option<i64> {
    with_session(|session| Ok(session.next_tick_deadline()))
        .ok()
        .flatten()
}

/// Full render snapshot as JSON.
///
/// Returns an empty string when the snapshot cannot be produced.
#[flutter_rust_bridge::frb(sync)]
pub fn session_snapshot() -> String {
    let result = with_session(|session| {
        serde_json::to_string(&session.snapshot()).map_err(|err| err.to_string())
    });
    match result {
        Ok(json) => json,
        Err(err) => {
            warn!("event=ffi_snapshot module=ffi status=error error={err}");
            String::new()
        }
    }
}

fn parse_view(raw: &str) -> Option<View> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "compose" | "composing" | "write" => Some(View::Composing),
        "browse" | "browsing" => Some(View::Browsing),
        _ => None,
    }
}

fn with_session<T>(f: impl FnOnce(&mut FfiSession) -> Result<T, String>) -> Result<T, String> {
    let lock = SESSION.get_or_init(|| {
        Mutex::new(Session::new(
            InMemoryNoteRepository::new(),
            SystemClock,
            SessionConfig::default(),
        ))
    });
    let mut session = lock
        .lock()
        .map_err(|_| "session lock poisoned".to_string())?;
    f(&mut session)
}

fn respond(
    op: &str,
    f: impl FnOnce(&mut FfiSession) -> Result<(&'static str, Option<NoteId>), String>,
) -> SessionActionResponse {
    let result = with_session(|session| {
        let (message, note_id) = f(session)?;
        Ok(SessionActionResponse::success(
            message,
            note_id,
            session.revision(),
        ))
    });
    result.unwrap_or_else(|err| SessionActionResponse::failure(format!("{op} failed: {err}")))
}
