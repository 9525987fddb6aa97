//! Services: the engine plus the input layer that validates setup and round
//! entries before they reach it.

pub mod game_engine;
pub mod round_entry;
pub mod settings;
pub mod setup;

#[cfg(test)]
mod tests_round_entry;

pub use game_engine::GameEngine;
pub use round_entry::{
    find_seat, submit_predictions, submit_results, RoundOrder, RoundOutcome, TrickEntry,
};
pub use settings::SetupPreferences;
pub use setup::{validate_names, validate_total_rounds, GameSetup};
