//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by draft and store.
//! - Derive title, preview and relative-age projections from raw fields.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reassigned.
//! - `title` always equals `derive_title(content)`; it has no setter.
//! - `timestamp` (creation time, epoch ms) is immutable.

use crate::model::mood::Mood;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::{NoContext, Timestamp, Uuid};

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 50;
/// Title used when the first line of content is blank.
pub const UNTITLED: &str = "Untitled";
/// Maximum preview length in characters, before the ellipsis.
pub const PREVIEW_MAX_CHARS: usize = 150;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Opaque, stable note identity.
///
/// Backed by a UUIDv7 so ids carry their creation instant and still stay
/// unique for notes created within the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Generates a fresh id stamped with `now_ms` (Unix epoch milliseconds).
    pub fn generate(now_ms: i64) -> Self {
        let millis = u64::try_from(now_ms).unwrap_or(0);
        let nanos = u32::try_from((millis % 1_000) * 1_000_000).unwrap_or(0);
        let ts = Timestamp::from_unix(NoContext, millis / 1_000, nanos);
        Self(Uuid::new_v7(ts))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing a [`NoteId`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteIdParseError(String);

impl Display for NoteIdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid note id `{}`", self.0)
    }
}

impl Error for NoteIdParseError {}

impl FromStr for NoteId {
    type Err = NoteIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|_| NoteIdParseError(trimmed.to_string()))
    }
}

/// One piece of mood-tagged writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNote")]
pub struct Note {
    id: NoteId,
    content: String,
    title: String,
    mood: Mood,
    /// Creation time in Unix epoch milliseconds.
    timestamp: i64,
}

/// Wire shape accepted on deserialize; `title` is always re-derived.
#[derive(Deserialize)]
struct RawNote {
    id: NoteId,
    content: String,
    mood: Mood,
    timestamp: i64,
}

impl From<RawNote> for Note {
    fn from(raw: RawNote) -> Self {
        let mut note = Note::new(raw.id, raw.mood, raw.timestamp);
        note.set_content(raw.content);
        note
    }
}

impl Note {
    /// Creates an empty note. Title starts as [`UNTITLED`].
    pub fn new(id: NoteId, mood: Mood, timestamp: i64) -> Self {
        Self {
            id,
            content: String::new(),
            title: UNTITLED.to_string(),
            mood,
            timestamp,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Replaces content and recomputes the derived title.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.title = derive_title(&self.content);
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    /// Whether the content holds anything besides whitespace.
    ///
    /// Only such notes may be committed to a store.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    pub fn preview(&self) -> String {
        derive_preview(&self.content)
    }

    /// Relative age of this note as seen at `now_ms`.
    pub fn age_label(&self, now_ms: i64) -> String {
        age_label(self.timestamp, now_ms)
    }
}

/// Derives a note title from raw content.
///
/// Rules:
/// - take the text before the first `\n` (whole string when none),
/// - keep at most [`TITLE_MAX_CHARS`] characters,
/// - trim surrounding whitespace,
/// - fall back to [`UNTITLED`] when nothing is left.
pub fn derive_title(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default();
    let truncated = first_line.chars().take(TITLE_MAX_CHARS).collect::<String>();
    let trimmed = truncated.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Derives browse-card preview text: whitespace collapsed to single spaces,
/// first [`PREVIEW_MAX_CHARS`] characters, `...` appended when cut.
pub fn derive_preview(content: &str) -> String {
    let normalized = WHITESPACE_RE.replace_all(content, " ");
    let trimmed = normalized.trim();
    let mut preview = trimmed.chars().take(PREVIEW_MAX_CHARS).collect::<String>();
    if trimmed.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Formats the distance between `timestamp_ms` and `now_ms` in words.
///
/// Timestamps in the future (clock skew) read as "just now".
pub fn age_label(timestamp_ms: i64, now_ms: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    let secs = now_ms.saturating_sub(timestamp_ms).max(0) / 1_000;
    let (count, unit) = match secs {
        s if s < MINUTE => return "just now".to_string(),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < MONTH => (s / DAY, "day"),
        s if s < YEAR => (s / MONTH, "month"),
        s => (s / YEAR, "year"),
    };
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
