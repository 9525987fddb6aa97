//! Remembered setup form: the last names entered and the rule preference.
//!
//! Stored under its own key so resetting a game keeps it. The record uses the
//! `{ "state": ..., "version": 0 }` envelope the web front-end persisted.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::rules::MAX_PLAYERS;
use crate::storage::{KeyValueStore, StorageError};

pub const SETTINGS_KEY: &str = "wizard_settings_v1";
const SETTINGS_VERSION: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPreferences {
    /// One slot per possible seat; empty slots are `""`.
    pub player_names: Vec<String>,
    pub use_anniversary_rules: bool,
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    state: T,
    version: u32,
}

impl Default for SetupPreferences {
    fn default() -> Self {
        Self {
            player_names: vec![String::new(); MAX_PLAYERS],
            use_anniversary_rules: false,
        }
    }
}

impl SetupPreferences {
    /// Load the stored preferences; anything missing or unreadable yields
    /// the defaults.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match Self::try_load(store) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = %e, "Failed to load setup preferences, using defaults");
                Self::default()
            }
        }
    }

    fn try_load<S: KeyValueStore>(store: &S) -> Result<Option<Self>, StorageError> {
        let Some(raw) = store.get(SETTINGS_KEY)? else {
            return Ok(None);
        };
        let envelope: Envelope<Self> = serde_json::from_str(&raw)?;
        Ok(Some(envelope.state.normalized()))
    }

    /// Best-effort save; failures are logged.
    pub fn save<S: KeyValueStore>(&self, store: &S) {
        let envelope = Envelope {
            state: self,
            version: SETTINGS_VERSION,
        };
        let written = serde_json::to_string(&envelope)
            .map_err(StorageError::from)
            .and_then(|raw| store.set(SETTINGS_KEY, &raw));
        match written {
            Ok(()) => debug!("Saved setup preferences"),
            Err(e) => warn!(error = %e, "Failed to save setup preferences"),
        }
    }

    /// Remember a submitted setup form.
    pub fn remember(&mut self, names: &[String], use_anniversary_rules: bool) {
        self.player_names = names.to_vec();
        self.player_names.resize(MAX_PLAYERS, String::new());
        self.use_anniversary_rules = use_anniversary_rules;
    }

    /// Names that are actually filled in, in slot order.
    pub fn filled_names(&self) -> Vec<String> {
        self.player_names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Exactly [`MAX_PLAYERS`] slots.
    fn normalized(mut self) -> Self {
        self.player_names.resize(MAX_PLAYERS, String::new());
        self
    }
}
