//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `moodnote_core` linkage.
//! - Run one scripted session on a manual clock and print the browse view,
//!   keeping output deterministic for quick local sanity checks.

use moodnote_core::{
    CommitOutcome, InMemoryNoteRepository, ManualClock, Mood, Session, SessionConfig,
    SessionError,
};
use std::time::Duration;

const SCRIPT: [(Mood, &str); 3] = [
    (Mood::Calm, "Lake at dawn\nMist over still water."),
    (Mood::Joyful, "Birthday dinner\nEveryone came."),
    (Mood::Calm, "Evening tea"),
];

fn main() -> Result<(), SessionError> {
    println!("moodnote_core ping={}", moodnote_core::ping());
    println!("moodnote_core version={}", moodnote_core::core_version());

    let clock = ManualClock::starting_at(0);
    let config = SessionConfig::default();
    let mut session = Session::new(InMemoryNoteRepository::new(), clock.clone(), config);

    for (index, (mood, text)) in SCRIPT.iter().enumerate() {
        if index > 0 {
            session.new_note();
        }
        session.set_mood(*mood);
        session.edit_draft(*text)?;
        clock.advance(config.autosave_delay());
        if let Some(CommitOutcome::Committed { id, .. }) = session.tick() {
            println!("saved {id}");
        }
        clock.advance(Duration::from_secs(60));
    }

    for group in session.snapshot().groups {
        println!(
            "{} {} ({})",
            group.display.glyph,
            group.display.label,
            group.notes.len()
        );
        for card in group.notes {
            println!("  - {} [{}]", card.title, card.age);
        }
    }

    session.shutdown();
    Ok(())
}
