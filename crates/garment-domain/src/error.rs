//! Domain error types

use crate::{Amount, ClaimId};
use thiserror::Error;

/// Errors raised while building a claim set
///
/// These are caught once, at construction; rules never re-validate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    /// A claim amount is below zero
    #[error("Claim {id} is negative: {amount}")]
    NegativeClaim {
        /// Offending claimant
        id: ClaimId,
        /// Offending amount
        amount: Amount,
    },

    /// The estate is below zero
    #[error("Estate is negative: {0}")]
    NegativeEstate(Amount),

    /// No claimants, yet something to divide
    #[error("No claims to divide a non-zero estate of {0} among")]
    EmptyClaims(Amount),

    /// The estate is larger than everything claimed against it
    #[error("Estate {estate} exceeds the total of all claims {total}")]
    EstateExceedsClaims {
        /// The estate
        estate: Amount,
        /// Sum of the claims
        total: Amount,
    },
}

/// Errors raised while reading an amount from text or a float
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Text is not an integer, fraction or plain decimal
    #[error("Malformed amount: {0:?}")]
    Malformed(String),

    /// A fraction with zero denominator
    #[error("Denominator must not be zero")]
    ZeroDenominator,

    /// NaN or infinity
    #[error("Amount must be a finite number")]
    NotFinite,

    /// The value needs a larger denominator than allowed
    #[error("{value} cannot be represented with a denominator of at most {max_denominator}")]
    Precision {
        /// Decimal rendering of the rejected value
        value: String,
        /// Configured bound
        max_denominator: u64,
    },
}
