//! Table tests: timed resets, restarts and stale tickets.

use std::time::Duration;

use memory_match::core::{Difficulty, GameConfig, ManualClock, Timestamp};
use memory_match::game::{GameSession, Phase, RevealOutcome, SessionId};
use memory_match::table::{ResetTicket, Table};

fn open_table(clock: &ManualClock, delay_ms: u64) -> Table<ManualClock> {
    let config = GameConfig::default()
        .with_seed(7)
        .with_mismatch_delay(Duration::from_millis(delay_ms));
    Table::new(config, clock.clone()).expect("table opens")
}

/// Indices of two cards with different symbols.
fn mismatch(session: &GameSession) -> (usize, usize) {
    let deck = session.deck();
    let other = (1..deck.len()).find(|&i| deck.get(i) != deck.get(0)).unwrap();
    (0, other)
}

/// Index of the card matching card 0.
fn partner_of_first(session: &GameSession) -> usize {
    let deck = session.deck();
    (1..deck.len()).find(|&i| deck.get(i) == deck.get(0)).unwrap()
}

// =============================================================================
// Timed reset
// =============================================================================

#[test]
fn test_reset_fires_after_delay() {
    let clock = ManualClock::new();
    let mut table = open_table(&clock, 700);
    let (a, b) = mismatch(table.session());

    table.reveal(a);
    assert_eq!(table.reveal(b), RevealOutcome::Mismatched);

    let ticket = table.pending_reset().unwrap();
    assert_eq!(ticket.session, table.session().id());
    assert_eq!(ticket.due, Timestamp::from_millis(700));

    clock.advance(Duration::from_millis(699));
    assert!(!table.tick());
    assert_eq!(table.session().phase(), Phase::AwaitingReset);

    clock.advance(Duration::from_millis(1));
    assert!(table.tick());
    assert_eq!(table.session().phase(), Phase::InProgress);
    assert!(table.session().revealed().is_empty());
}

#[test]
fn test_repeated_ticks_are_idempotent() {
    let clock = ManualClock::new();
    let mut table = open_table(&clock, 500);
    let (a, b) = mismatch(table.session());

    table.reveal(a);
    table.reveal(b);
    clock.advance(Duration::from_secs(2));

    let fired: Vec<bool> = (0..5).map(|_| table.tick()).collect();
    assert_eq!(fired, vec![true, false, false, false, false]);
    assert_eq!(table.session().move_count(), 1);
}

#[test]
fn test_input_blocked_until_reset() {
    let clock = ManualClock::new();
    let mut table = open_table(&clock, 500);
    let (a, b) = mismatch(table.session());
    let partner = partner_of_first(table.session());

    table.reveal(a);
    table.reveal(b);

    clock.advance(Duration::from_millis(200));
    assert!(!table.reveal(partner).is_accepted());
    assert_eq!(table.session().move_count(), 1);

    clock.advance(Duration::from_millis(300));
    assert_eq!(table.reveal(a), RevealOutcome::FirstFlipped);
    assert_eq!(table.reveal(partner), RevealOutcome::Matched { complete: false });
}

#[test]
fn test_fire_ticket_directly() {
    let clock = ManualClock::new();
    let mut table = open_table(&clock, 500);
    let (a, b) = mismatch(table.session());

    table.reveal(a);
    table.reveal(b);
    let ticket = table.pending_reset().unwrap();

    assert!(table.fire(ticket));
    assert_eq!(table.pending_reset(), None);
    assert!(!table.fire(ticket));
}

/// A ticket already handled by `tick` must not cut a later mismatch short.
#[test]
fn test_resolved_ticket_does_not_reset_next_mismatch() {
    let clock = ManualClock::new();
    let mut table = open_table(&clock, 500);
    let (a, b) = mismatch(table.session());

    table.reveal(a);
    table.reveal(b);
    let old = table.pending_reset().unwrap();

    clock.advance(Duration::from_secs(1));
    assert!(table.tick());

    // Second mismatch in the same session
    let other = (1..table.session().card_count())
        .find(|&i| i != b && table.session().deck().get(i) != table.session().deck().get(a))
        .unwrap();
    table.reveal(a);
    assert_eq!(table.reveal(other), RevealOutcome::Mismatched);
    let current = table.pending_reset().unwrap();
    assert_eq!(current.session, old.session);
    assert_ne!(current, old);

    assert!(!table.fire(old));
    assert_eq!(table.session().phase(), Phase::AwaitingReset);
    assert_eq!(table.session().revealed().len(), 2);
    assert_eq!(table.pending_reset(), Some(current));

    assert!(table.fire(current));
    assert_eq!(table.session().phase(), Phase::InProgress);
}

// =============================================================================
// Stale tickets
// =============================================================================

/// A reset scheduled before a restart must not touch the new session.
#[test]
fn test_stale_ticket_after_restart() {
    let clock = ManualClock::new();
    let mut table = open_table(&clock, 500);
    let (a, b) = mismatch(table.session());

    table.reveal(a);
    table.reveal(b);
    let stale = table.pending_reset().unwrap();

    let new_id = table.restart().unwrap();
    assert_ne!(stale.session, new_id);
    assert_eq!(table.pending_reset(), None);

    // Put the new session into its own mismatch
    let (c, d) = mismatch(table.session());
    table.reveal(c);
    table.reveal(d);
    assert_eq!(table.session().phase(), Phase::AwaitingReset);

    clock.advance(Duration::from_secs(1));
    assert!(!table.fire(stale));
    assert_eq!(table.session().phase(), Phase::AwaitingReset);
    assert_eq!(table.session().revealed().len(), 2);

    // The new session's own ticket still works
    assert!(table.tick());
    assert_eq!(table.session().phase(), Phase::InProgress);
}

#[test]
fn test_stale_ticket_after_difficulty_change() {
    let clock = ManualClock::new();
    let mut table = open_table(&clock, 500);
    let (a, b) = mismatch(table.session());

    table.reveal(a);
    table.reveal(b);
    let stale = table.pending_reset().unwrap();

    table.set_difficulty(Difficulty::Medium).unwrap();
    table.reveal(0);

    assert!(!table.fire(stale));
    assert_eq!(table.session().pending(), (Some(0), None));
    assert_eq!(table.session().card_count(), 12);
}

#[test]
fn test_forged_ticket_ignored() {
    let clock = ManualClock::new();
    let mut table = open_table(&clock, 500);

    let ticket = ResetTicket::new(SessionId::new(99), Timestamp::ZERO);
    assert!(!table.fire(ticket));
    assert_eq!(table.session().phase(), Phase::NotStarted);
}

// =============================================================================
// Full game
// =============================================================================

#[test]
fn test_perfect_game_summary() {
    let clock = ManualClock::new();
    let config = GameConfig::default().with_seed(11).with_difficulty(Difficulty::Hard);
    let mut table = Table::new(config, clock.clone()).unwrap();

    let symbols = table.session().deck().symbols().to_vec();
    let mut done = vec![false; symbols.len()];
    for i in 0..symbols.len() {
        if done[i] {
            continue;
        }
        let j = (i + 1..symbols.len()).find(|&j| symbols[j] == symbols[i]).unwrap();
        done[i] = true;
        done[j] = true;

        table.reveal(i);
        clock.advance(Duration::from_secs(1));
        table.reveal(j);
    }

    assert!(table.session().is_complete());
    let summary = table.summary().unwrap();
    assert_eq!(summary.moves, 8);
    assert_eq!(summary.pairs, 8);
    assert_eq!(summary.efficiency_percent, 100.0);
    assert_eq!(summary.elapsed, Duration::from_secs(8));

    // Clock keeps running, the final time does not
    clock.advance(Duration::from_secs(60));
    assert_eq!(table.snapshot().elapsed_secs, 8);
}
