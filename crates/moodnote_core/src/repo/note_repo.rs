//! Note store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold committed notes keyed by `NoteId`.
//! - Provide upsert/remove/lookup and the mood-grouped browse projection.
//!
//! # Invariants
//! - At most one stored note per `NoteId`.
//! - Upsert of a known id replaces in place; collection size changes only on
//!   insert.
//! - The store performs no content validation. Callers must reject blank
//!   content before upserting.
//! - Mood grouping is recomputed from the flat collection on every call.

use crate::model::mood::Mood;
use crate::model::note::{Note, NoteId};
use log::debug;
use std::collections::BTreeMap;

/// Result of one upsert call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new entry was appended.
    Inserted,
    /// An entry with the same id was replaced at its existing position.
    Replaced,
}

/// Store interface for committed notes.
///
/// A durable backend would implement this same contract; only the in-memory
/// store exists today.
pub trait NoteRepository {
    /// Inserts or replaces a note by id.
    fn upsert(&mut self, note: Note) -> UpsertOutcome;
    /// Removes a note by id. Returns `false` when the id is unknown.
    fn remove(&mut self, id: NoteId) -> bool;
    /// Gets one note by id.
    fn get(&self, id: NoteId) -> Option<&Note>;
    /// All notes in insertion order.
    fn list(&self) -> &[Note];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Groups notes by mood.
    ///
    /// Keys follow catalog order, notes keep insertion order inside a group,
    /// and moods without notes are absent.
    fn group_by_mood(&self) -> BTreeMap<Mood, Vec<Note>> {
        group_by_mood(self.list())
    }
}

/// Process-memory note store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-committed notes, keeping the last entry
    /// for any repeated id.
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let mut repo = Self::new();
        for note in notes {
            repo.upsert(note);
        }
        repo
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id() == id)
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn upsert(&mut self, note: Note) -> UpsertOutcome {
        match self.position(note.id()) {
            Some(index) => {
                self.notes[index] = note;
                UpsertOutcome::Replaced
            }
            None => {
                self.notes.push(note);
                UpsertOutcome::Inserted
            }
        }
    }

    fn remove(&mut self, id: NoteId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => {
                debug!("event=note_remove module=repo status=noop note_id={id}");
                false
            }
        }
    }

    fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    fn list(&self) -> &[Note] {
        &self.notes
    }
}

/// Groups a flat note slice by mood, preserving relative order.
pub fn group_by_mood(notes: &[Note]) -> BTreeMap<Mood, Vec<Note>> {
    let mut groups: BTreeMap<Mood, Vec<Note>> = BTreeMap::new();
    for note in notes {
        groups.entry(note.mood()).or_default().push(note.clone());
    }
    groups
}
