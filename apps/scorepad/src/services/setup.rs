//! Game setup validation.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::rules::{round_bounds, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{Overlay, RuleFlags};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::game_engine::GameEngine;
use crate::storage::KeyValueStore;

/// Trim the entered names and check the table is playable.
///
/// Names must be filled top to bottom: an empty slot followed by a filled one
/// is rejected rather than silently compacted.
pub fn validate_names(raw: &[String]) -> Result<Vec<String>, DomainError> {
    let trimmed: Vec<&str> = raw.iter().map(|n| n.trim()).collect();

    if let Some(first_empty) = trimmed.iter().position(|n| n.is_empty()) {
        if trimmed[first_empty + 1..].iter().any(|n| !n.is_empty()) {
            return Err(DomainError::validation(
                ValidationKind::NameGap,
                format!(
                    "Player names must be entered without gaps (slot {} is empty)",
                    first_empty + 1
                ),
            ));
        }
    }

    let names: Vec<String> = trimmed
        .into_iter()
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect();

    if names.len() < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooFewPlayers,
            format!("At least {MIN_PLAYERS} players are required, got {}", names.len()),
        ));
    }
    if names.len() > MAX_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooManyPlayers,
            format!("At most {MAX_PLAYERS} players are allowed, got {}", names.len()),
        ));
    }

    let mut seen = HashSet::with_capacity(names.len());
    if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
        return Err(DomainError::validation(
            ValidationKind::DuplicateName,
            format!("Every name must be unique, '{dup}' appears twice"),
        ));
    }

    Ok(names)
}

/// Check a round-count override against the band for `player_count` players.
pub fn validate_total_rounds(player_count: usize, rounds: u32) -> Result<u32, DomainError> {
    let bounds = round_bounds(player_count);
    if !bounds.contains(&rounds) {
        return Err(DomainError::validation(
            ValidationKind::RoundsOutOfRange,
            format!(
                "Round count must be in range {}..={} for {player_count} players, got {rounds}",
                bounds.start(),
                bounds.end()
            ),
        ));
    }
    Ok(rounds)
}

/// Everything the setup form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSetup {
    /// Raw name slots, top to bottom.
    pub names: Vec<String>,
    pub rules: RuleFlags,
    /// Override for the default round count.
    pub rounds: Option<u32>,
}

impl GameSetup {
    /// Validate and start the game on `engine`. Nothing reaches the engine
    /// when validation fails.
    ///
    /// Returns the trimmed names that were seated.
    pub fn apply<S: KeyValueStore>(
        &self,
        engine: &mut GameEngine<S>,
    ) -> Result<Vec<String>, DomainError> {
        let names = validate_names(&self.names)?;
        let rounds = self
            .rounds
            .map(|r| validate_total_rounds(names.len(), r))
            .transpose()?;
        debug!(players = names.len(), ?rounds, "Setup validated");

        engine.configure(&names, self.rules);
        if let Some(rounds) = rounds {
            engine.set_total_rounds(rounds);
        }
        engine.set_overlay(Overlay::Prediction);
        Ok(names)
    }
}
