use crate::domain::state::{Overlay, RuleFlags};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::services::game_engine::GameEngine;
use crate::services::round_entry::{
    find_seat, submit_predictions, submit_results, RoundOrder, TrickEntry,
};
use crate::services::setup::GameSetup;
use crate::storage::MemoryStore;

fn engine_with(names: &[&str], anniversary: bool) -> GameEngine<MemoryStore> {
    let mut engine = GameEngine::new(MemoryStore::new());
    GameSetup {
        names: names.iter().map(|s| (*s).to_string()).collect(),
        rules: RuleFlags {
            use_anniversary_rules: anniversary,
            use_not_equal: false,
        },
        rounds: None,
    }
    .apply(&mut engine)
    .unwrap();
    engine
}

fn plain(tricks: &[u32]) -> Vec<TrickEntry> {
    tricks.iter().copied().map(TrickEntry::plain).collect()
}

fn kind_of(err: DomainError) -> ValidationKind {
    err.kind().cloned().expect("validation error")
}

#[test]
fn round_order_starts_at_rotating_seat() {
    let mut engine = engine_with(&["A", "B", "C", "D"], false);
    let order = RoundOrder::for_state(engine.state());
    assert_eq!(order.seats().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

    submit_predictions(&mut engine, &[0, 0, 0, 0]).unwrap();
    submit_results(&mut engine, &plain(&[0, 0, 0, 1])).unwrap();

    let order = RoundOrder::for_state(engine.state());
    assert_eq!(order.start(), 1);
    assert_eq!(order.seats().collect::<Vec<_>>(), vec![1, 2, 3, 0]);
}

#[test]
fn first_round_example_scores() {
    let mut engine = engine_with(&["A", "B", "C"], false);
    submit_predictions(&mut engine, &[1, 1, 1]).unwrap();
    assert_eq!(engine.state().overlay, Overlay::Result);

    let outcome = submit_results(&mut engine, &plain(&[1, 0, 0])).unwrap();
    assert_eq!(outcome.round_no, 1);
    assert_eq!(outcome.deltas, vec![30, -10, -10]);
    assert!(!outcome.game_over);

    let state = engine.state();
    assert_eq!(state.current_round, 2);
    assert_eq!(state.overlay, Overlay::None);
}

#[test]
fn values_follow_presentation_order() {
    let mut engine = engine_with(&["A", "B", "C"], false);
    submit_predictions(&mut engine, &[0, 0, 0]).unwrap();
    submit_results(&mut engine, &plain(&[1, 0, 0])).unwrap();

    // Round 2 opens at seat 1 (B): values are B, C, A.
    submit_predictions(&mut engine, &[2, 0, 1]).unwrap();
    let state = engine.state();
    assert_eq!(state.players[1].predictions.value_at(1), Some(2));
    assert_eq!(state.players[2].predictions.value_at(1), Some(0));
    assert_eq!(state.players[0].predictions.value_at(1), Some(1));
}

#[test]
fn bids_are_bounded_by_round_number() {
    let mut engine = engine_with(&["A", "B", "C"], false);
    let err = submit_predictions(&mut engine, &[0, 2, 0]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidBid);
    assert_eq!(engine.state().overlay, Overlay::Prediction);
}

#[test]
fn entry_count_must_match_players() {
    let mut engine = engine_with(&["A", "B", "C"], false);
    let err = submit_predictions(&mut engine, &[0, 0]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::WrongEntryCount);
}

#[test]
fn results_before_predictions_is_phase_mismatch() {
    let mut engine = engine_with(&["A", "B", "C"], false);
    let err = submit_results(&mut engine, &plain(&[0, 0, 1])).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::PhaseMismatch);
}

#[test]
fn predictions_twice_is_phase_mismatch() {
    let mut engine = engine_with(&["A", "B", "C"], false);
    submit_predictions(&mut engine, &[0, 0, 0]).unwrap();
    let err = submit_predictions(&mut engine, &[1, 0, 0]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::PhaseMismatch);
}

#[test]
fn entries_without_a_game_are_rejected() {
    let mut engine = GameEngine::new(MemoryStore::new());
    let err = submit_predictions(&mut engine, &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::GameNotStarted);
}

#[test]
fn cloud_needs_anniversary_rules() {
    let mut engine = engine_with(&["A", "B", "C"], false);
    submit_predictions(&mut engine, &[1, 0, 0]).unwrap();
    let entries = vec![
        TrickEntry::with_cloud(1),
        TrickEntry::plain(0),
        TrickEntry::plain(0),
    ];
    let err = submit_results(&mut engine, &entries).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CloudNotAllowed);
}

#[test]
fn only_one_cloud_per_round() {
    let mut engine = engine_with(&["A", "B", "C"], true);
    submit_predictions(&mut engine, &[1, 0, 0]).unwrap();
    let entries = vec![
        TrickEntry::with_cloud(1),
        TrickEntry::with_cloud(1),
        TrickEntry::plain(0),
    ];
    let err = submit_results(&mut engine, &entries).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::MultipleClouds);
}

#[test]
fn cloud_holder_needs_a_trick() {
    let mut engine = engine_with(&["A", "B", "C"], true);
    submit_predictions(&mut engine, &[1, 0, 0]).unwrap();
    let entries = vec![
        TrickEntry::with_cloud(0),
        TrickEntry::plain(1),
        TrickEntry::plain(0),
    ];
    let err = submit_results(&mut engine, &entries).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CloudWithoutTricks);
    assert_eq!(engine.state().current_round, 1);
}

#[test]
fn cloud_off_by_one_scores_as_exact() {
    let mut engine = engine_with(&["A", "B", "C"], true);
    // Play through to round 5 so a bid of 4 is legal.
    for _ in 0..4 {
        submit_predictions(&mut engine, &[0, 0, 0]).unwrap();
        submit_results(&mut engine, &plain(&[0, 0, 0])).unwrap();
    }
    assert_eq!(engine.state().current_round, 5);
    // Round 5 opens at seat 1: order is B, C, A.
    submit_predictions(&mut engine, &[4, 0, 1]).unwrap();
    let entries = vec![
        TrickEntry::with_cloud(5),
        TrickEntry::plain(0),
        TrickEntry::plain(0),
    ];
    let outcome = submit_results(&mut engine, &entries).unwrap();
    assert_eq!(outcome.deltas[1], 60);

    let b = &engine.state().players[1];
    assert_eq!(b.results.value_at(4), Some(4));
    assert_eq!(b.received_results.value_at(4), Some(5));
    assert_eq!(b.wolke_used.value_at(4), Some(true));
}

#[test]
fn cloud_far_miss_scores_one_over() {
    let mut engine = engine_with(&["A", "B", "C", "D", "E", "F"], true);
    for _ in 0..6 {
        submit_predictions(&mut engine, &[0; 6]).unwrap();
        submit_results(&mut engine, &plain(&[0; 6])).unwrap();
    }
    // Round 7 opens at seat 0 again.
    submit_predictions(&mut engine, &[4, 0, 0, 0, 0, 0]).unwrap();
    let mut entries = plain(&[0; 6]);
    entries[0] = TrickEntry::with_cloud(7);
    let outcome = submit_results(&mut engine, &entries).unwrap();
    assert_eq!(outcome.deltas[0], -10);
    assert_eq!(engine.state().players[0].results.value_at(6), Some(5));
    assert_eq!(engine.state().players[0].received_results.value_at(6), Some(7));
}

#[test]
fn last_round_ends_the_game() {
    let mut engine = engine_with(&["A", "B", "C"], false);
    engine.set_total_rounds(1);
    submit_predictions(&mut engine, &[1, 0, 0]).unwrap();
    let outcome = submit_results(&mut engine, &plain(&[1, 0, 0])).unwrap();
    assert!(outcome.game_over);

    let err = submit_predictions(&mut engine, &[0, 0, 0]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::GameOver);
}

#[test]
fn find_seat_by_name() {
    let engine = engine_with(&["Ada", "Bo", "Cy"], false);
    assert_eq!(find_seat(engine.state(), "Cy").unwrap(), 2);
    assert!(matches!(
        find_seat(engine.state(), "Zed"),
        Err(DomainError::NotFound(NotFoundKind::Player, _))
    ));
}
