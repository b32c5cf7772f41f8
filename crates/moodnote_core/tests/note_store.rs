use moodnote_core::{InMemoryNoteRepository, Mood, Note, NoteId, NoteRepository, UpsertOutcome};

fn note(ts: i64, mood: Mood, content: &str) -> Note {
    let mut note = Note::new(NoteId::generate(ts), mood, ts);
    note.set_content(content);
    note
}

#[test]
fn upsert_same_id_twice_keeps_one_entry_with_latest_content() {
    let mut repo = InMemoryNoteRepository::new();
    let mut draft = note(1_000, Mood::Calm, "first version");

    assert_eq!(repo.upsert(draft.clone()), UpsertOutcome::Inserted);
    draft.set_content("second version");
    assert_eq!(repo.upsert(draft.clone()), UpsertOutcome::Replaced);

    assert_eq!(repo.len(), 1);
    let stored = repo.get(draft.id()).expect("note should be stored");
    assert_eq!(stored.content(), "second version");
    assert_eq!(stored.title(), "second version");
}

#[test]
fn group_by_mood_preserves_insertion_order_and_omits_empty_moods() {
    let mut repo = InMemoryNoteRepository::new();
    let note1 = note(1, Mood::Calm, "one");
    let note2 = note(2, Mood::Joyful, "two");
    let note3 = note(3, Mood::Calm, "three");
    repo.upsert(note1.clone());
    repo.upsert(note2.clone());
    repo.upsert(note3.clone());

    let groups = repo.group_by_mood();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&Mood::Calm], vec![note1, note3]);
    assert_eq!(groups[&Mood::Joyful], vec![note2]);
    assert!(!groups.contains_key(&Mood::Energetic));
    assert_eq!(
        groups.keys().copied().collect::<Vec<_>>(),
        vec![Mood::Calm, Mood::Joyful]
    );
}

#[test]
fn grouping_reflects_mood_change_on_replace() {
    let mut repo = InMemoryNoteRepository::new();
    let mut moving = note(1, Mood::Calm, "moving");
    repo.upsert(moving.clone());
    repo.upsert(note(2, Mood::Calm, "staying"));

    moving.set_mood(Mood::Energetic);
    repo.upsert(moving.clone());

    let groups = repo.group_by_mood();
    assert_eq!(groups[&Mood::Calm].len(), 1);
    assert_eq!(groups[&Mood::Energetic][0].id(), moving.id());
}

#[test]
fn remove_deletes_permanently_and_ignores_unknown_ids() {
    let mut repo = InMemoryNoteRepository::new();
    let target = note(1, Mood::Melancholy, "gone soon");
    repo.upsert(target.clone());

    assert!(repo.remove(target.id()));
    assert!(repo.is_empty());
    assert!(repo.get(target.id()).is_none());
    assert!(!repo.remove(target.id()));
    assert!(repo.group_by_mood().is_empty());
}
