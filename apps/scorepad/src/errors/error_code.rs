//! Error codes reported by the scorepad.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what the CLI prints.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup validation
    /// Fewer than three players
    TooFewPlayers,
    /// More than six players
    TooManyPlayers,
    /// Two players share a name
    DuplicateName,
    /// Names must be entered top to bottom without gaps
    NameGap,
    /// Round count outside the allowed band
    RoundsOutOfRange,

    // Round entry validation
    /// Bid outside 0..=round
    InvalidBid,
    /// Tricks outside 0..=round
    InvalidTricks,
    /// One value per player expected
    WrongEntryCount,
    /// Entry does not fit the open input step
    PhaseMismatch,
    /// No game configured
    GameNotStarted,
    /// All rounds already played
    GameOver,
    /// Cloud flag without the anniversary rules
    CloudNotAllowed,
    /// More than one cloud in a round
    MultipleClouds,
    /// Cloud holder reported zero tricks
    CloudWithoutTricks,
    /// General validation error
    ValidationError,

    // Not found
    /// Player name not at the table
    PlayerNotFound,
    /// General not found error
    NotFound,

    // System errors
    /// Key-value store failure
    StorageError,
    /// Persisted record could not be read back
    DataCorruption,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TooFewPlayers => "TOO_FEW_PLAYERS",
            Self::TooManyPlayers => "TOO_MANY_PLAYERS",
            Self::DuplicateName => "DUPLICATE_NAME",
            Self::NameGap => "NAME_GAP",
            Self::RoundsOutOfRange => "ROUNDS_OUT_OF_RANGE",

            Self::InvalidBid => "INVALID_BID",
            Self::InvalidTricks => "INVALID_TRICKS",
            Self::WrongEntryCount => "WRONG_ENTRY_COUNT",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::GameOver => "GAME_OVER",
            Self::CloudNotAllowed => "CLOUD_NOT_ALLOWED",
            Self::MultipleClouds => "MULTIPLE_CLOUDS",
            Self::CloudWithoutTricks => "CLOUD_WITHOUT_TRICKS",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::StorageError => "STORAGE_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
