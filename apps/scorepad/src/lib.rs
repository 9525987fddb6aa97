#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod render;
pub mod services;
pub mod storage;
pub mod telemetry;


pub use config::{Config, LogConfig, LogFormat};
pub use domain::state::{GameState, Overlay, Player, ResultMeta, RuleFlags};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::{GameEngine, GameSetup, SetupPreferences};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
