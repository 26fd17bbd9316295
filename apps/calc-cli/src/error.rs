//! # App Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Function → AppResult<T>                                        │
//! │         │                                                               │
//! │         ├── Config file unreadable?  ── Io / ConfigParse ──┐            │
//! │         ├── Config values invalid?   ── InvalidConfig ─────┤            │
//! │         ├── Field rejected?          ── InvalidInput ──────┤            │
//! │         └── Calculation failed?      ── Calc ──────────────┤            │
//! │                                                            ▼            │
//! │                                         main: print + exit_code()       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use calc_core::CalcError;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// Calculation could not run.
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// One or more fields were rejected; message is already user-facing.
    #[error("{0}")]
    InvalidInput(String),

    /// Config file exists but could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for our schema.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but holds unusable values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// JSON rendering failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error.
    ///
    /// `2` for anything the user typed, `1` for environment problems.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) | AppError::Calc(_) => 2,
            AppError::Io(_)
            | AppError::ConfigParse(_)
            | AppError::InvalidConfig(_)
            | AppError::Json(_) => 1,
        }
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
