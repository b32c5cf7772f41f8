//! Session configuration.
//!
//! # Invariants
//! - Every field has a default, so partial host payloads deserialize.
//! - Unknown mood ids in `default_mood` resolve to `calm`.

use crate::model::mood::Mood;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default autosave debounce in milliseconds.
pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 1_000;

/// Tunables for one note-taking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Quiet period after the last edit before the draft is committed.
    /// `0` commits on the next tick.
    pub autosave_delay_ms: u64,
    /// Mood selected when the session starts.
    pub default_mood: Mood,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autosave_delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
            default_mood: Mood::default(),
        }
    }
}

impl SessionConfig {
    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }
}
