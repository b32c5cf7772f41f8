//! Mood catalog.
//!
//! # Responsibility
//! - Define the closed set of moods a note can carry.
//! - Own all mood-keyed display metadata (label, glyph, color/theme hints,
//!   editor placeholder) so presentation never keeps its own lookup tables.
//!
//! # Invariants
//! - Catalog order is stable: calm, energetic, contemplative, melancholy,
//!   joyful. `Ord` follows catalog order.
//! - Unknown mood identifiers resolve to `Mood::Calm`, never to an error.
//! - Wire form is the lowercase identifier.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Emotional tag attached to every note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    #[default]
    Calm,
    Energetic,
    Contemplative,
    Melancholy,
    Joyful,
}

/// Presentation metadata for one mood.
///
/// Only the presentation layer interprets these values; core never branches
/// on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodDisplay {
    pub label: &'static str,
    pub glyph: &'static str,
    /// Accent class used for mood chips and browse cards.
    pub color_hint: &'static str,
    /// Full-page background class while composing in this mood.
    pub theme_hint: &'static str,
    /// Empty-editor prompt.
    pub placeholder: &'static str,
}

const CATALOG: [Mood; 5] = [
    Mood::Calm,
    Mood::Energetic,
    Mood::Contemplative,
    Mood::Melancholy,
    Mood::Joyful,
];

impl Mood {
    /// Returns every mood in stable catalog order.
    pub fn list() -> &'static [Mood] {
        &CATALOG
    }

    /// Resolves an external identifier to a catalog mood.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Anything unrecognized falls back to `Mood::Calm`.
    pub fn resolve(id: &str) -> Mood {
        match Self::parse(id) {
            Some(mood) => mood,
            None => {
                debug!("event=mood_resolve module=mood status=fallback fallback=calm");
                Mood::default()
            }
        }
    }

    /// Strict lookup; `None` for identifiers outside the catalog.
    pub fn parse(id: &str) -> Option<Mood> {
        let normalized = id.trim();
        CATALOG
            .iter()
            .copied()
            .find(|mood| mood.id().eq_ignore_ascii_case(normalized))
    }

    /// Stable lowercase identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Contemplative => "contemplative",
            Self::Melancholy => "melancholy",
            Self::Joyful => "joyful",
        }
    }

    pub fn display(self) -> MoodDisplay {
        match self {
            Self::Calm => MoodDisplay {
                label: "Calm",
                glyph: "🌊",
                color_hint: "bg-blue-100 text-blue-800",
                theme_hint: "bg-gradient-to-br from-slate-50 via-blue-50 to-indigo-100",
                placeholder: "Let your thoughts flow like gentle waves...",
            },
            Self::Energetic => MoodDisplay {
                label: "Energetic",
                glyph: "⚡",
                color_hint: "bg-orange-100 text-orange-800",
                theme_hint: "bg-gradient-to-br from-orange-50 via-yellow-50 to-amber-100",
                placeholder: "Capture the spark of inspiration...",
            },
            Self::Contemplative => MoodDisplay {
                label: "Contemplative",
                glyph: "🌙",
                color_hint: "bg-purple-100 text-purple-800",
                theme_hint: "bg-gradient-to-br from-purple-50 via-violet-50 to-indigo-100",
                placeholder: "Dive deep into reflection...",
            },
            Self::Melancholy => MoodDisplay {
                label: "Melancholy",
                glyph: "🌧️",
                color_hint: "bg-gray-100 text-gray-800",
                theme_hint: "bg-gradient-to-br from-gray-50 via-slate-100 to-blue-100",
                placeholder: "Pour out what weighs on your heart...",
            },
            Self::Joyful => MoodDisplay {
                label: "Joyful",
                glyph: "☀️",
                color_hint: "bg-rose-100 text-rose-800",
                theme_hint: "bg-gradient-to-br from-pink-50 via-rose-50 to-orange-100",
                placeholder: "Celebrate this moment in words...",
            },
        }
    }
}

/// Free-function form of [`Mood::display`] for callers holding a catalog id.
pub fn display_of(mood: Mood) -> MoodDisplay {
    mood.display()
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Mood::resolve(&raw))
    }
}
