//! Error types for the CLI application.

use garment_domain::{AmountError, ClaimError};
use garment_engine::{ConfigError, EngineError, GameError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine configuration error
    #[error(transparent)]
    EngineConfig(#[from] ConfigError),

    /// Division failed
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Game construction failed
    #[error(transparent)]
    Game(#[from] GameError),

    /// Invalid claim set
    #[error("Invalid claims: {0}")]
    Claim(#[from] ClaimError),

    /// Unparseable amount
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
