use std::collections::HashSet;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::storage::StorageError;
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds_to_their_codes() {
    let cases = [
        (ValidationKind::TooFewPlayers, "TOO_FEW_PLAYERS"),
        (ValidationKind::NameGap, "NAME_GAP"),
        (ValidationKind::InvalidBid, "INVALID_BID"),
        (ValidationKind::PhaseMismatch, "PHASE_MISMATCH"),
        (ValidationKind::CloudWithoutTricks, "CLOUD_WITHOUT_TRICKS"),
    ];
    for (kind, expected) in cases {
        let app: AppError = DomainError::validation(kind, "bad input").into();
        assert_eq!(app.code().as_str(), expected);
        assert_eq!(app.detail(), "bad input");
        assert_eq!(app.exit_code(), 2);
    }
}

#[test]
fn other_validation_falls_back_to_generic_code() {
    let de = DomainError::validation(ValidationKind::Other("X".into()), "odd");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Player, "no Zed").into();
    assert_eq!(app.code(), ErrorCode::PlayerNotFound);
    assert!(matches!(app, AppError::NotFound { .. }));

    let app: AppError = DomainError::not_found(NotFoundKind::Other("x".into()), "gone").into();
    assert_eq!(app.code(), ErrorCode::NotFound);
}

#[test]
fn maps_storage_failures() {
    let app: AppError = StorageError::Unavailable("disk full".into()).into();
    assert_eq!(app.code(), ErrorCode::StorageError);
    assert_eq!(app.exit_code(), 1);

    let app: AppError = StorageError::Corrupt("truncated".into()).into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);

    let app: AppError = StorageError::UnsupportedVersion {
        found: 7,
        supported: 2,
    }
    .into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert!(app.detail().contains('7'));
}

#[test]
fn config_errors_use_config_code() {
    let app = AppError::config("SCOREPAD_LOG_FORMAT must be pretty or json");
    assert_eq!(app.code().as_str(), "CONFIG_ERROR");
    assert_eq!(app.exit_code(), 1);
}

#[test]
fn error_codes_are_unique() {
    let all = [
        ErrorCode::TooFewPlayers,
        ErrorCode::TooManyPlayers,
        ErrorCode::DuplicateName,
        ErrorCode::NameGap,
        ErrorCode::RoundsOutOfRange,
        ErrorCode::InvalidBid,
        ErrorCode::InvalidTricks,
        ErrorCode::WrongEntryCount,
        ErrorCode::PhaseMismatch,
        ErrorCode::GameNotStarted,
        ErrorCode::GameOver,
        ErrorCode::CloudNotAllowed,
        ErrorCode::MultipleClouds,
        ErrorCode::CloudWithoutTricks,
        ErrorCode::ValidationError,
        ErrorCode::PlayerNotFound,
        ErrorCode::NotFound,
        ErrorCode::StorageError,
        ErrorCode::DataCorruption,
        ErrorCode::ConfigError,
    ];

    let mut seen = HashSet::new();
    for code in all {
        let s = code.as_str();
        assert!(seen.insert(s), "Duplicate error code string: {s}");
    }
}
