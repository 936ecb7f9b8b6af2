//! Engine error types

use garment_domain::{Amount, AmountError, ClaimError, ClaimId};
use thiserror::Error;

/// Threshold solver invariant violated
///
/// Rules only ever call the solver with valid caps and targets, so this signals
/// a defect in the calling rule, never bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A cap is below zero
    #[error("Cap {index} is negative: {cap}")]
    NegativeCap {
        /// Position of the cap
        index: usize,
        /// Offending value
        cap: Amount,
    },

    /// Target lies outside `[0, Σcaps]`
    #[error("Target {target} is outside [0, {total}]")]
    TargetOutOfRange {
        /// Requested target
        target: Amount,
        /// Sum of all caps
        total: Amount,
    },
}

/// Errors that can occur during engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Solver invariant violated (engine bug)
    #[error("Internal solver error: {0}")]
    Domain(#[from] DomainError),

    /// Invalid claim data
    #[error("Invalid claims: {0}")]
    Claim(#[from] ClaimError),

    /// Unparseable or imprecise amount
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    /// A claim exceeds the estate and the policy forbids truncation
    #[error("Claim {id} of {claim} exceeds the estate {estate}")]
    OverEstate {
        /// Offending claimant
        id: ClaimId,
        /// Its claim
        claim: Amount,
        /// The estate
        estate: Amount,
    },
}

/// Errors raised while building a bankruptcy game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coalition enumeration is exponential; the player count is capped
    #[error("Game has {players} players; at most {max} are supported")]
    TooManyPlayers {
        /// Number of claimants
        players: usize,
        /// Supported maximum
        max: usize,
    },
}

/// Engine configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to serialize config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
