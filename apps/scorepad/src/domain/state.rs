use serde::{Deserialize, Serialize};

use crate::domain::rules::{rounds_for_count, start_player_index};
use crate::domain::scoring::record_result;
use crate::domain::slots::RoundSlots;

/// Which input step the front-end has open. Persisted so a reload resumes
/// mid-round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    /// Bids for the current round are being entered.
    Prediction,
    /// Tricks taken for the current round are being entered.
    Result,
    /// Between rounds.
    #[default]
    None,
}

/// Rule variants chosen at setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleFlags {
    /// Anniversary edition: the cloud card may shift a result by one.
    pub use_anniversary_rules: bool,
    /// Reserved. Stored and persisted, no effect on scoring.
    pub use_not_equal: bool,
}

/// Extra facts recorded alongside a scored result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultMeta {
    pub wolke_used: bool,
    /// Tricks as entered, before the cloud adjustment.
    pub received_tricks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub predictions: RoundSlots<u32>,
    /// Tricks used for scoring (after any cloud adjustment).
    pub results: RoundSlots<u32>,
    /// Cumulative score through each round.
    pub points: RoundSlots<i32>,
    pub wolke_used: RoundSlots<bool>,
    pub received_results: RoundSlots<u32>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predictions: RoundSlots::new(),
            results: RoundSlots::new(),
            points: RoundSlots::new(),
            wolke_used: RoundSlots::new(),
            received_results: RoundSlots::new(),
        }
    }

    /// Cumulative score through `round_idx`; unscored rounds count as 0.
    pub fn points_through(&self, round_idx: usize) -> i32 {
        self.points.value_at(round_idx).unwrap_or(0)
    }

    /// Points gained or lost in `round_idx` alone.
    pub fn round_delta(&self, round_idx: usize) -> Option<i32> {
        let through = self.points.value_at(round_idx)?;
        let before = match round_idx {
            0 => 0,
            r => self.points_through(r - 1),
        };
        Some(through - before)
    }

    /// Latest cumulative score.
    pub fn total(&self) -> i32 {
        self.points.last().copied().unwrap_or(0)
    }
}

/// Entire scorepad state. Transitions return a new value and leave `self`
/// untouched; the engine swaps the result in and persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Seat order.
    pub players: Vec<Player>,
    /// 1-based; past `total_rounds` once the game is over.
    pub current_round: u32,
    pub total_rounds: u32,
    pub game_started: bool,
    pub use_anniversary_rules: bool,
    pub use_not_equal: bool,
    pub overlay: Overlay,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            current_round: 1,
            total_rounds: 0,
            game_started: false,
            use_anniversary_rules: false,
            use_not_equal: false,
            overlay: Overlay::None,
        }
    }
}

impl GameState {
    /// Fresh game for the given seating.
    pub fn configured(names: &[String], rules: RuleFlags) -> Self {
        Self {
            players: names.iter().map(Player::new).collect(),
            current_round: 1,
            total_rounds: rounds_for_count(names.len()),
            game_started: true,
            use_anniversary_rules: rules.use_anniversary_rules,
            use_not_equal: rules.use_not_equal,
            overlay: Overlay::None,
        }
    }

    /// Non-positive values keep the current round count.
    pub fn with_total_rounds(&self, rounds: u32) -> Self {
        let mut next = self.clone();
        if rounds > 0 {
            next.total_rounds = rounds;
        }
        next
    }

    pub fn with_prediction(&self, player: usize, value: u32) -> Self {
        let mut next = self.clone();
        let round_idx = self.round_index();
        next.players[player].predictions.set(round_idx, value);
        next
    }

    /// Score `tricks` for `player` in the current round.
    pub fn with_result(&self, player: usize, tricks: u32, meta: Option<ResultMeta>) -> Self {
        let mut next = self.clone();
        let round_idx = self.round_index();
        record_result(&mut next.players[player], round_idx, tricks, meta);
        next
    }

    pub fn with_next_round(&self) -> Self {
        let mut next = self.clone();
        next.current_round += 1;
        next
    }

    pub fn with_anniversary_rules(&self, on: bool) -> Self {
        Self {
            use_anniversary_rules: on,
            ..self.clone()
        }
    }

    pub fn with_not_equal(&self, on: bool) -> Self {
        Self {
            use_not_equal: on,
            ..self.clone()
        }
    }

    pub fn with_overlay(&self, overlay: Overlay) -> Self {
        Self {
            overlay,
            ..self.clone()
        }
    }

    /// 0-based index of the current round into the per-round slots.
    #[inline]
    pub fn round_index(&self) -> usize {
        self.current_round.saturating_sub(1) as usize
    }

    pub fn start_player_index(&self) -> usize {
        start_player_index(self.current_round, self.players.len())
    }

    pub fn is_game_over(&self) -> bool {
        self.game_started && self.current_round > self.total_rounds
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
