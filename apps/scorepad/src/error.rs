use thiserror::Error;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Storage error: {detail}")]
    Storage { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Storage { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Storage { detail, .. }
            | AppError::Config { detail } => detail,
        }
    }

    /// Process exit status for the CLI: 2 for bad input, 1 for everything
    /// the user cannot fix by retyping.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation { .. } | AppError::NotFound { .. } => 2,
            AppError::Storage { .. } | AppError::Config { .. } => 1,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

fn validation_code(kind: &ValidationKind) -> ErrorCode {
    match kind {
        ValidationKind::TooFewPlayers => ErrorCode::TooFewPlayers,
        ValidationKind::TooManyPlayers => ErrorCode::TooManyPlayers,
        ValidationKind::DuplicateName => ErrorCode::DuplicateName,
        ValidationKind::NameGap => ErrorCode::NameGap,
        ValidationKind::RoundsOutOfRange => ErrorCode::RoundsOutOfRange,
        ValidationKind::InvalidBid => ErrorCode::InvalidBid,
        ValidationKind::InvalidTricks => ErrorCode::InvalidTricks,
        ValidationKind::WrongEntryCount => ErrorCode::WrongEntryCount,
        ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
        ValidationKind::GameNotStarted => ErrorCode::GameNotStarted,
        ValidationKind::GameOver => ErrorCode::GameOver,
        ValidationKind::CloudNotAllowed => ErrorCode::CloudNotAllowed,
        ValidationKind::MultipleClouds => ErrorCode::MultipleClouds,
        ValidationKind::CloudWithoutTricks => ErrorCode::CloudWithoutTricks,
        ValidationKind::Other(_) => ErrorCode::ValidationError,
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                AppError::invalid(validation_code(&kind), detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
        }
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        let code = match e {
            StorageError::Serde(_)
            | StorageError::Corrupt(_)
            | StorageError::UnsupportedVersion { .. } => ErrorCode::DataCorruption,
            StorageError::Io { .. }
            | StorageError::InvalidKey(_)
            | StorageError::Unavailable(_) => ErrorCode::StorageError,
        };
        AppError::Storage {
            code,
            detail: e.to_string(),
        }
    }
}
