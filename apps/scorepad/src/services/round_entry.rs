//! Round entry: bids, then tricks (with the cloud card), then the round closes.
//!
//! Values arrive in presentation order, which starts at the round's opening
//! seat; they are mapped back to seats before touching the engine.

use tracing::{debug, info};

use crate::domain::rules::valid_trick_range;
use crate::domain::scoring::cloud_adjusted_tricks;
use crate::domain::state::{GameState, Overlay, ResultMeta};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::services::game_engine::GameEngine;
use crate::storage::KeyValueStore;

/// Order in which seats are asked for input this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOrder {
    start: usize,
    count: usize,
}

impl RoundOrder {
    pub fn for_state(state: &GameState) -> Self {
        Self {
            start: state.start_player_index(),
            count: state.player_count(),
        }
    }

    /// Seat asked at `position` (0 = opening seat).
    pub fn seat_at(&self, position: usize) -> usize {
        debug_assert!(position < self.count, "position {position} out of range");
        (self.start + position) % self.count
    }

    pub fn seats(&self) -> impl Iterator<Item = usize> {
        let order = *self;
        (0..self.count).map(move |pos| order.seat_at(pos))
    }

    pub fn start(&self) -> usize {
        self.start
    }
}

/// Tricks as entered for one seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrickEntry {
    pub tricks: u32,
    /// This seat holds the cloud card (anniversary edition only).
    pub cloud: bool,
}

impl TrickEntry {
    pub fn plain(tricks: u32) -> Self {
        Self {
            tricks,
            cloud: false,
        }
    }

    pub fn with_cloud(tricks: u32) -> Self {
        Self { tricks, cloud: true }
    }
}

/// What closing a round produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round_no: u32,
    /// Points gained or lost this round, by seat.
    pub deltas: Vec<i32>,
    pub game_over: bool,
}

/// Seat of the player called `name`.
pub fn find_seat(state: &GameState, name: &str) -> Result<usize, DomainError> {
    state
        .players
        .iter()
        .position(|p| p.name == name)
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("No player '{name}'"))
        })
}

fn ensure_round_open(state: &GameState) -> Result<(), DomainError> {
    if !state.game_started {
        return Err(DomainError::validation(
            ValidationKind::GameNotStarted,
            "No game has been configured",
        ));
    }
    if state.is_game_over() {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            format!("All {} rounds have been played", state.total_rounds),
        ));
    }
    Ok(())
}

fn ensure_entry_count(state: &GameState, got: usize) -> Result<(), DomainError> {
    if got != state.player_count() {
        return Err(DomainError::validation(
            ValidationKind::WrongEntryCount,
            format!("Expected {} values, got {got}", state.player_count()),
        ));
    }
    Ok(())
}

/// Record every seat's bid for the current round and open the result step.
///
/// Re-entering bids is allowed until results have been requested.
pub fn submit_predictions<S: KeyValueStore>(
    engine: &mut GameEngine<S>,
    values: &[u32],
) -> Result<(), DomainError> {
    let state = engine.state();
    ensure_round_open(state)?;
    if state.overlay == Overlay::Result {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Results for round {} are pending", state.current_round),
        ));
    }
    ensure_entry_count(state, values.len())?;

    let order = RoundOrder::for_state(state);
    let range = valid_trick_range(state.current_round);
    for (pos, &value) in values.iter().enumerate() {
        if !range.contains(&value) {
            let seat = order.seat_at(pos);
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!(
                    "Bid for {} must be in range {range:?}, got {value}",
                    state.players[seat].name
                ),
            ));
        }
    }

    debug!(
        round = state.current_round,
        start = order.start(),
        "Predictions validated"
    );
    for (pos, &value) in values.iter().enumerate() {
        engine.set_prediction(order.seat_at(pos), value);
    }
    engine.set_overlay(Overlay::Result);
    Ok(())
}

/// Score every seat for the current round, close it, and return to the idle
/// step.
///
/// A cloud holder's tricks are adjusted with [`cloud_adjusted_tricks`]; the
/// raw count is kept alongside the scored one.
pub fn submit_results<S: KeyValueStore>(
    engine: &mut GameEngine<S>,
    entries: &[TrickEntry],
) -> Result<RoundOutcome, DomainError> {
    let state = engine.state();
    ensure_round_open(state)?;
    if state.overlay != Overlay::Result {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!(
                "Predictions for round {} have not been entered",
                state.current_round
            ),
        ));
    }
    ensure_entry_count(state, entries.len())?;

    let order = RoundOrder::for_state(state);
    let clouds = entries.iter().filter(|e| e.cloud).count();
    if clouds > 0 && !state.use_anniversary_rules {
        return Err(DomainError::validation(
            ValidationKind::CloudNotAllowed,
            "The cloud only exists in the anniversary edition",
        ));
    }
    if clouds > 1 {
        return Err(DomainError::validation(
            ValidationKind::MultipleClouds,
            format!("Only one player can hold the cloud, got {clouds}"),
        ));
    }

    let range = valid_trick_range(state.current_round);
    for (pos, entry) in entries.iter().enumerate() {
        let name = &state.players[order.seat_at(pos)].name;
        if !range.contains(&entry.tricks) {
            return Err(DomainError::validation(
                ValidationKind::InvalidTricks,
                format!(
                    "Tricks for {name} must be in range {range:?}, got {}",
                    entry.tricks
                ),
            ));
        }
        if entry.cloud && entry.tricks == 0 {
            return Err(DomainError::validation(
                ValidationKind::CloudWithoutTricks,
                format!("{name} holds the cloud and must have taken at least one trick"),
            ));
        }
    }

    let round_no = state.current_round;
    let round_idx = state.round_index();
    for (pos, entry) in entries.iter().enumerate() {
        let seat = order.seat_at(pos);
        let prediction = engine.state().players[seat]
            .predictions
            .value_at(round_idx)
            .unwrap_or(0);
        let tricks = if entry.cloud {
            cloud_adjusted_tricks(prediction, entry.tricks)
        } else {
            entry.tricks
        };
        let meta = ResultMeta {
            wolke_used: entry.cloud,
            received_tricks: entry.tricks,
        };
        engine.set_result(seat, tricks, Some(meta));
    }

    let deltas = engine
        .state()
        .players
        .iter()
        .map(|p| p.round_delta(round_idx).unwrap_or(0))
        .collect();

    engine.advance_round();
    engine.set_overlay(Overlay::None);
    let game_over = engine.state().is_game_over();
    info!(round_no, seats = entries.len(), game_over, "Round closed");

    Ok(RoundOutcome {
        round_no,
        deltas,
        game_over,
    })
}
