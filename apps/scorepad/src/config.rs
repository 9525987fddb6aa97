//! Runtime configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

pub const DEFAULT_DATA_DIR: &str = ".scorepad";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "SCOREPAD_LOG_FORMAT must be 'pretty' or 'json', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Filter precedence: `SCOREPAD_LOG`, then `RUST_LOG`, then `warn`.
    pub fn from_env() -> Result<Self, AppError> {
        let data_dir = non_empty_var("SCOREPAD_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let filter = non_empty_var("SCOREPAD_LOG")
            .or_else(|| non_empty_var("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let format = match env::var("SCOREPAD_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw)?,
            Err(env::VarError::NotPresent) => LogFormat::default(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(AppError::config("SCOREPAD_LOG_FORMAT is not valid UTF-8"))
            }
        };

        Ok(Self {
            data_dir,
            log: LogConfig { filter, format },
        })
    }

    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = dir;
        }
        self
    }

    /// `--verbose` forces debug output for this crate.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log.filter = "scorepad=debug".to_string();
        }
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
