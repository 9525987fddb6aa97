//! Persisted game record: schema, versioning and load-time migration.
//!
//! Version history:
//! - v1: unversioned records. `wolkeUsed`, `receivedResults`, `overlay`,
//!   `useNotEqual` and `totalRounds` may be missing.
//! - v2: explicit `version` field, every field present.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{KeyValueStore, StorageError};
use crate::domain::rules::rounds_for_count;
use crate::domain::slots::RoundSlots;
use crate::domain::state::{GameState, Overlay, Player};

/// Storage key of the game record.
pub const SNAPSHOT_KEY: &str = "wizard_state_v1";
/// Schema written by [`encode`].
pub const SCHEMA_VERSION: u32 = 2;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    #[serde(flatten)]
    state: &'a GameState,
}

#[derive(Deserialize)]
struct SnapshotIn {
    #[allow(dead_code)]
    version: u32,
    #[serde(flatten)]
    state: GameState,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct LegacySnapshot {
    players: Vec<LegacyPlayer>,
    current_round: Option<u32>,
    total_rounds: Option<u32>,
    game_started: Option<bool>,
    use_anniversary_rules: Option<bool>,
    use_not_equal: Option<bool>,
    overlay: Option<Overlay>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyPlayer {
    name: String,
    #[serde(default)]
    predictions: RoundSlots<u32>,
    #[serde(default)]
    results: RoundSlots<u32>,
    #[serde(default)]
    points: RoundSlots<i32>,
    #[serde(default)]
    wolke_used: RoundSlots<bool>,
    #[serde(default)]
    received_results: RoundSlots<u32>,
}

impl From<LegacyPlayer> for Player {
    fn from(p: LegacyPlayer) -> Self {
        Self {
            name: p.name,
            predictions: p.predictions,
            results: p.results,
            points: p.points,
            wolke_used: p.wolke_used,
            received_results: p.received_results,
        }
    }
}

fn migrate_v1(legacy: LegacySnapshot) -> GameState {
    let players: Vec<Player> = legacy.players.into_iter().map(Player::from).collect();
    let total_rounds = match legacy.total_rounds {
        Some(rounds) if rounds > 0 => rounds,
        _ => rounds_for_count(players.len()),
    };
    let defaults = GameState::default();
    GameState {
        current_round: legacy.current_round.unwrap_or(defaults.current_round),
        total_rounds,
        game_started: legacy.game_started.unwrap_or(defaults.game_started),
        use_anniversary_rules: legacy
            .use_anniversary_rules
            .unwrap_or(defaults.use_anniversary_rules),
        use_not_equal: legacy.use_not_equal.unwrap_or(defaults.use_not_equal),
        overlay: legacy.overlay.unwrap_or(defaults.overlay),
        players,
    }
}

/// Serialize `state` at the current schema version.
pub fn encode(state: &GameState) -> Result<String, StorageError> {
    let out = SnapshotOut {
        version: SCHEMA_VERSION,
        state,
    };
    Ok(serde_json::to_string(&out)?)
}

/// Parse a stored record of any known version, migrating it to the current
/// in-memory shape.
pub fn decode(raw: &str) -> Result<GameState, StorageError> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(StorageError::Corrupt("snapshot is not a JSON object".into()));
    }

    let version = match value.get("version") {
        None => 1,
        Some(v) => v
            .as_u64()
            .ok_or_else(|| StorageError::Corrupt(format!("bad snapshot version {v}")))?,
    };

    match version {
        1 => {
            let legacy: LegacySnapshot = serde_json::from_value(value)?;
            let state = migrate_v1(legacy);
            info!(
                from = 1,
                to = SCHEMA_VERSION,
                players = state.players.len(),
                total_rounds = state.total_rounds,
                "Migrated legacy snapshot"
            );
            Ok(state)
        }
        v if v == u64::from(SCHEMA_VERSION) => {
            let snapshot: SnapshotIn = serde_json::from_value(value)?;
            Ok(snapshot.state)
        }
        found => Err(StorageError::UnsupportedVersion {
            found,
            supported: SCHEMA_VERSION,
        }),
    }
}

/// Load the game record, `None` when nothing is stored.
pub fn load_state<S: KeyValueStore>(store: &S) -> Result<Option<GameState>, StorageError> {
    match store.get(SNAPSHOT_KEY)? {
        Some(raw) => decode(&raw).map(Some),
        None => {
            debug!(key = SNAPSHOT_KEY, "No stored snapshot");
            Ok(None)
        }
    }
}

pub fn save_state<S: KeyValueStore>(store: &S, state: &GameState) -> Result<(), StorageError> {
    let raw = encode(state)?;
    store.set(SNAPSHOT_KEY, &raw)
}

/// Delete the record entirely; an absent record is the reset state.
pub fn clear_state<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
    store.remove(SNAPSHOT_KEY)
}
