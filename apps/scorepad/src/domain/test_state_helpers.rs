//! Test-only builders for scorepad states.

use crate::domain::state::{GameState, RuleFlags};

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// Started game for `list`, default round count, standard rules.
pub fn started(list: &[&str]) -> GameState {
    GameState::configured(&names(list), RuleFlags::default())
}

/// Play one full round: every seat bids and scores, then the round advances.
pub fn play_round(state: &GameState, bids: &[u32], tricks: &[u32]) -> GameState {
    assert_eq!(bids.len(), state.players.len(), "one bid per seat");
    assert_eq!(tricks.len(), state.players.len(), "one result per seat");
    let mut next = state.clone();
    for (seat, &bid) in bids.iter().enumerate() {
        next = next.with_prediction(seat, bid);
    }
    for (seat, &won) in tricks.iter().enumerate() {
        next = next.with_result(seat, won, None);
    }
    next.with_next_round()
}
