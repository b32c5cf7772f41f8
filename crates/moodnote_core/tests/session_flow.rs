use moodnote_core::{
    CommitOutcome, InMemoryNoteRepository, ManualClock, Mood, Note, NoteId, NoteRepository,
    Session, SessionConfig, SessionError, View,
};
use std::time::Duration;

const START_MS: i64 = 1_700_000_000_000;

fn setup() -> (Session<InMemoryNoteRepository, ManualClock>, ManualClock) {
    setup_with(InMemoryNoteRepository::new())
}

fn setup_with(
    repo: InMemoryNoteRepository,
) -> (Session<InMemoryNoteRepository, ManualClock>, ManualClock) {
    let clock = ManualClock::starting_at(START_MS);
    let session = Session::new(repo, clock.clone(), SessionConfig::default());
    (session, clock)
}

fn advance(clock: &ManualClock, ms: u64) {
    clock.advance(Duration::from_millis(ms));
}

/// Edits, waits out the debounce and commits.
fn write_and_commit(
    session: &mut Session<InMemoryNoteRepository, ManualClock>,
    clock: &ManualClock,
    text: &str,
) -> NoteId {
    session.edit_draft(text).unwrap();
    advance(clock, 1_000);
    match session.tick() {
        Some(CommitOutcome::Committed { id, .. }) => id,
        other => panic!("expected commit, got {other:?}"),
    }
}

#[test]
fn empty_store_bootstraps_one_blank_draft_in_composing() {
    let (session, _clock) = setup();

    assert_eq!(session.view(), View::Composing);
    let draft = session.draft().expect("bootstrap draft");
    assert_eq!(draft.content(), "");
    assert_eq!(draft.mood(), Mood::Calm);
    assert_eq!(draft.timestamp(), START_MS);
    assert!(session.notes().is_empty());
    assert!(session.snapshot().groups.is_empty());
}

#[test]
fn populated_store_does_not_bootstrap_a_draft() {
    let mut existing = Note::new(NoteId::generate(1), Mood::Joyful, 1);
    existing.set_content("already here");
    let (mut session, _clock) = setup_with(InMemoryNoteRepository::with_notes([existing]));

    assert!(session.draft().is_none());
    assert_eq!(
        session.edit_draft("nowhere to go"),
        Err(SessionError::Draft(moodnote_core::DraftError::NoActiveDraft))
    );
}

#[test]
fn rapid_edits_collapse_into_one_commit_with_last_content() {
    let (mut session, clock) = setup();

    session.edit_draft("a").unwrap();
    advance(&clock, 300);
    assert_eq!(session.tick(), None);
    session.edit_draft("ab").unwrap();
    advance(&clock, 300);
    assert_eq!(session.tick(), None);
    session.edit_draft("abc").unwrap();
    advance(&clock, 999);
    assert_eq!(session.tick(), None);
    assert!(session.notes().is_empty());

    advance(&clock, 1);
    assert!(matches!(
        session.tick(),
        Some(CommitOutcome::Committed { .. })
    ));
    assert_eq!(session.tick(), None);

    assert_eq!(session.notes().len(), 1);
    assert_eq!(session.notes().list()[0].content(), "abc");
}

#[test]
fn blank_edits_never_reach_the_store() {
    let (mut session, clock) = setup();

    session.edit_draft("").unwrap();
    advance(&clock, 5_000);
    assert!(matches!(
        session.tick(),
        Some(CommitOutcome::SkippedBlank { .. })
    ));
    assert!(session.notes().is_empty());

    session.edit_draft("  \n\t").unwrap();
    advance(&clock, 5_000);
    session.tick();
    assert!(session.notes().is_empty());
}

#[test]
fn mood_change_is_picked_up_by_pending_commit() {
    let (mut session, clock) = setup();

    session.edit_draft("sunny afternoon").unwrap();
    advance(&clock, 500);
    session.set_mood(Mood::Joyful);
    assert!(session.has_pending_commit());
    advance(&clock, 500);
    session.tick();

    let stored = &session.notes().list()[0];
    assert_eq!(stored.mood(), Mood::Joyful);
    assert_eq!(session.selected_mood(), Mood::Joyful);
}

#[test]
fn set_mood_alone_does_not_schedule_a_commit() {
    let (mut session, clock) = setup();

    session.set_mood(Mood::Energetic);
    assert!(!session.has_pending_commit());
    advance(&clock, 10_000);
    assert_eq!(session.tick(), None);
}

#[test]
fn new_note_cancels_pending_commit_of_previous_draft() {
    let (mut session, clock) = setup();
    session.set_mood(Mood::Melancholy);

    session.edit_draft("superseded thought").unwrap();
    let new_id = session.new_note();
    advance(&clock, 5_000);
    assert_eq!(session.tick(), None);
    assert!(session.notes().is_empty());

    let draft = session.draft().unwrap();
    assert_eq!(draft.id(), new_id);
    assert_eq!(draft.mood(), Mood::Melancholy);
    assert_eq!(draft.content(), "");
}

#[test]
fn select_note_loads_copy_and_switches_to_composing() {
    let (mut session, clock) = setup();
    session.set_mood(Mood::Contemplative);
    let first = write_and_commit(&mut session, &clock, "deep thoughts");
    session.new_note();
    session.set_mood(Mood::Energetic);

    session.switch_view(View::Browsing);
    session.select_note(first).unwrap();

    assert_eq!(session.view(), View::Composing);
    assert_eq!(session.selected_mood(), Mood::Contemplative);
    let draft = session.draft().unwrap();
    assert_eq!(draft.id(), first);
    assert_eq!(draft.content(), "deep thoughts");
}

#[test]
fn select_unknown_note_is_reported() {
    let (mut session, _clock) = setup();
    session.switch_view(View::Browsing);
    let missing = NoteId::generate(START_MS);

    assert_eq!(
        session.select_note(missing),
        Err(SessionError::NoteNotFound(missing))
    );
    assert_eq!(session.view(), View::Browsing);
}

#[test]
fn editing_a_loaded_note_replaces_it_in_place() {
    let (mut session, clock) = setup();
    let first = write_and_commit(&mut session, &clock, "first");
    session.new_note();
    write_and_commit(&mut session, &clock, "second");

    session.select_note(first).unwrap();
    write_and_commit(&mut session, &clock, "first, revised");

    let list = session.notes().list();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id(), first);
    assert_eq!(list[0].content(), "first, revised");
    assert_eq!(list[1].content(), "second");
}

#[test]
fn deleting_the_loaded_note_leaves_the_draft_intact() {
    let (mut session, clock) = setup();
    let id = write_and_commit(&mut session, &clock, "keep me in the editor");

    session.switch_view(View::Browsing);
    session.select_note(id).unwrap();
    session.switch_view(View::Browsing);
    assert!(session.delete_note(id));

    assert!(session.notes().is_empty());
    assert_eq!(session.view(), View::Browsing);
    let draft = session.draft().unwrap();
    assert_eq!(draft.id(), id);
    assert_eq!(draft.content(), "keep me in the editor");
}

#[test]
fn delete_of_unknown_id_is_noop() {
    let (mut session, clock) = setup();
    write_and_commit(&mut session, &clock, "survivor");
    let revision = session.revision();

    assert!(!session.delete_note(NoteId::generate(START_MS)));
    assert_eq!(session.notes().len(), 1);
    assert_eq!(session.revision(), revision);
}

#[test]
fn browsing_keeps_pending_commit_running() {
    let (mut session, clock) = setup();
    session.edit_draft("written before browsing").unwrap();
    session.switch_view(View::Browsing);
    advance(&clock, 1_000);
    session.tick();

    assert_eq!(session.notes().len(), 1);
    session.switch_view(View::Composing);
    assert_eq!(session.draft().unwrap().content(), "written before browsing");
}

#[test]
fn shutdown_cancels_outstanding_commit() {
    let (mut session, clock) = setup();
    session.edit_draft("never saved").unwrap();

    assert!(session.shutdown());
    advance(&clock, 5_000);
    assert_eq!(session.tick(), None);
    assert!(session.notes().is_empty());
}

#[test]
fn snapshot_groups_cards_by_mood_in_catalog_order() {
    let (mut session, clock) = setup();
    session.set_mood(Mood::Joyful);
    write_and_commit(&mut session, &clock, "Party\nlots of cake");
    session.new_note();
    session.set_mood(Mood::Calm);
    write_and_commit(&mut session, &clock, "Lake at dawn");
    advance(&clock, 120_000);

    let snapshot = session.snapshot();
    let moods = snapshot.groups.iter().map(|g| g.mood).collect::<Vec<_>>();
    assert_eq!(moods, vec![Mood::Calm, Mood::Joyful]);
    let joyful = &snapshot.groups[1];
    assert_eq!(joyful.display.label, "Joyful");
    assert_eq!(joyful.notes[0].title, "Party");
    assert_eq!(joyful.notes[0].preview, "Party lots of cake");
    assert_eq!(joyful.notes[0].age, "2 minutes ago");

    let draft = snapshot.draft.expect("draft snapshot");
    assert_eq!(draft.title, "Lake at dawn");
    assert!(!draft.pending_commit);

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["view"], "composing");
    assert_eq!(json["groups"][0]["mood"], "calm");
}

#[test]
fn revision_advances_on_state_changes() {
    let (mut session, clock) = setup();
    let start = session.revision();

    session.edit_draft("x").unwrap();
    let after_edit = session.revision();
    assert!(after_edit > start);

    session.switch_view(View::Composing);
    assert_eq!(session.revision(), after_edit);

    advance(&clock, 1_000);
    session.tick();
    assert!(session.revision() > after_edit);
}

#[test]
fn custom_autosave_delay_is_honored() {
    let clock = ManualClock::starting_at(0);
    let config = SessionConfig {
        autosave_delay_ms: 50,
        ..SessionConfig::default()
    };
    let mut session = Session::new(InMemoryNoteRepository::new(), clock.clone(), config);

    session.edit_draft("quick").unwrap();
    assert_eq!(session.next_tick_deadline(), Some(50));
    advance(&clock, 50);
    assert!(matches!(
        session.tick(),
        Some(CommitOutcome::Committed { .. })
    ));
}

#[test]
fn new_note_commits_draft_whose_quiet_period_already_elapsed() {
    let (mut session, clock) = setup();
    session.edit_draft("typed and left alone").unwrap();
    advance(&clock, 5_000);

    session.new_note();
    assert_eq!(session.notes().len(), 1);
    assert_eq!(session.notes().list()[0].content(), "typed and left alone");
    assert_eq!(session.tick(), None);
}

#[test]
fn select_note_commits_elapsed_revision_before_loading() {
    let (mut session, clock) = setup();
    let first = write_and_commit(&mut session, &clock, "first");
    session.edit_draft("first, revised").unwrap();
    advance(&clock, 5_000);

    session.switch_view(View::Browsing);
    let cards = session.snapshot().groups[0].notes.clone();
    assert_eq!(cards[0].title, "first, revised");

    session.select_note(first).unwrap();
    assert_eq!(session.notes().get(first).unwrap().content(), "first, revised");
    assert_eq!(session.draft().unwrap().content(), "first, revised");
    assert_eq!(session.tick(), None);
}

#[test]
fn shutdown_commits_elapsed_draft_instead_of_dropping_it() {
    let (mut session, clock) = setup();
    session.edit_draft("finished before closing").unwrap();
    advance(&clock, 1_500);

    assert!(!session.shutdown());
    assert_eq!(session.notes().len(), 1);
    assert_eq!(session.notes().list()[0].content(), "finished before closing");
}

#[test]
fn mood_change_after_elapsed_commit_does_not_rewrite_saved_mood() {
    let (mut session, clock) = setup();
    session.edit_draft("calm words").unwrap();
    advance(&clock, 2_000);

    session.set_mood(Mood::Melancholy);
    assert_eq!(session.notes().list()[0].mood(), Mood::Calm);
    assert_eq!(session.draft().unwrap().mood(), Mood::Melancholy);
    assert!(!session.has_pending_commit());
}
