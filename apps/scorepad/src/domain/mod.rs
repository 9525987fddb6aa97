//! Domain layer: pure scorepad state, rules and scoring.

pub mod rules;
pub mod scoreboard;
pub mod scoring;
pub mod slots;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use rules::{round_bounds, rounds_for_count, start_player_index};
pub use scoreboard::{standings, winner_names, winners, Standing};
pub use scoring::{cloud_adjusted_tricks, round_points};
pub use slots::RoundSlots;
pub use state::{GameState, Overlay, Player, ResultMeta, RuleFlags};
