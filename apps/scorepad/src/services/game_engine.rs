//! The scorepad controller: owns the [`GameState`] and writes it through to a
//! [`KeyValueStore`] after every command.
//!
//! Inputs are trusted. Range checks, cloud bookkeeping and name rules live in
//! the setup and round-entry services; a bad `player` index here is a bug in
//! the caller and panics.

use tracing::{debug, info, warn};

use crate::domain::state::{GameState, Overlay, ResultMeta, RuleFlags};
use crate::storage::snapshot::{clear_state, load_state, save_state};
use crate::storage::KeyValueStore;

#[derive(Debug)]
pub struct GameEngine<S> {
    state: GameState,
    store: S,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Restore the last saved game from `store`, or start empty.
    ///
    /// Unreadable records are logged and ignored; the next save overwrites
    /// them.
    pub fn load(store: S) -> Self {
        let state = match load_state(&store) {
            Ok(Some(state)) => {
                info!(
                    players = state.players.len(),
                    current_round = state.current_round,
                    total_rounds = state.total_rounds,
                    "Restored saved game"
                );
                state
            }
            Ok(None) => GameState::default(),
            Err(e) => {
                warn!(error = %e, "Failed to load saved game, starting empty");
                GameState::default()
            }
        };
        Self { state, store }
    }

    /// Engine over `store` with an empty state; nothing is read or written.
    pub fn new(store: S) -> Self {
        Self {
            state: GameState::default(),
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn configure(&mut self, names: &[String], rules: RuleFlags) {
        info!(
            players = names.len(),
            anniversary = rules.use_anniversary_rules,
            not_equal = rules.use_not_equal,
            "Configuring new game"
        );
        self.commit(GameState::configured(names, rules));
    }

    /// `rounds == 0` keeps the current value.
    pub fn set_total_rounds(&mut self, rounds: u32) {
        debug!(rounds, "Setting total rounds");
        self.commit(self.state.with_total_rounds(rounds));
    }

    pub fn set_prediction(&mut self, player: usize, value: u32) {
        self.check_player(player);
        debug!(
            player,
            value,
            round = self.state.current_round,
            "Recording prediction"
        );
        self.commit(self.state.with_prediction(player, value));
    }

    /// `tricks` is the scoring value, already cloud-adjusted by the caller.
    pub fn set_result(&mut self, player: usize, tricks: u32, meta: Option<ResultMeta>) {
        self.check_player(player);
        let next = self.state.with_result(player, tricks, meta);
        debug!(
            player,
            tricks,
            round = self.state.current_round,
            points = next.players[player].points_through(self.state.round_index()),
            "Recording result"
        );
        self.commit(next);
    }

    /// Close the current round. The caller makes sure every seat was scored.
    pub fn advance_round(&mut self) {
        let next = self.state.with_next_round();
        if next.is_game_over() {
            info!(rounds_played = self.state.current_round, "Game completed");
        } else {
            debug!(current_round = next.current_round, "Advanced round");
        }
        self.commit(next);
    }

    /// Back to an empty state; the stored record is deleted, not overwritten.
    pub fn reset_game(&mut self) {
        info!("Resetting game");
        self.state = GameState::default();
        if let Err(e) = clear_state(&self.store) {
            warn!(error = %e, "Failed to delete saved game");
        }
    }

    pub fn set_use_anniversary_rules(&mut self, on: bool) {
        self.commit(self.state.with_anniversary_rules(on));
    }

    pub fn set_use_not_equal(&mut self, on: bool) {
        self.commit(self.state.with_not_equal(on));
    }

    pub fn set_overlay(&mut self, overlay: Overlay) {
        debug!(?overlay, "Switching overlay");
        self.commit(self.state.with_overlay(overlay));
    }

    pub fn current_start_player_index(&self) -> usize {
        self.state.start_player_index()
    }

    /// Best-effort write of the current state. Failures are logged; the
    /// in-memory state stays authoritative.
    pub fn save(&self) {
        if let Err(e) = save_state(&self.store, &self.state) {
            warn!(error = %e, "Save failed, keeping state in memory only");
        }
    }

    fn commit(&mut self, next: GameState) {
        self.state = next;
        self.save();
    }

    #[inline]
    fn check_player(&self, player: usize) {
        debug_assert!(
            player < self.state.players.len(),
            "player index {player} out of range for {} players",
            self.state.players.len()
        );
    }
}
