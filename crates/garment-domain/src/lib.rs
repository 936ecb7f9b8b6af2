//! Garment Domain Layer
//!
//! This crate holds the value objects of a claims-division (bankruptcy) problem:
//! exact rational amounts, validated claim sets, allocations and the closed set
//! of rule identifiers. It performs no division itself; `garment-engine` does.
//!
//! ## Key Concepts
//!
//! - **Amount**: exact reduced rational; no floating point past the boundary
//! - **ClaimSet**: claims plus an estate no larger than their total
//! - **Allocation**: one award per claimant, summing exactly to the estate
//! - **Rule**: proportional, CEA, CEL or Talmud
//!
//! ## Architecture
//!
//! - Immutable inputs, validated once at construction
//! - Pure data; the rules themselves live in `garment-engine`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod allocation;
pub mod amount;
pub mod claim;
pub mod error;
pub mod rule;

// Re-exports for convenience
pub use allocation::Allocation;
pub use amount::Amount;
pub use claim::{Claim, ClaimId, ClaimSet};
pub use error::{AmountError, ClaimError};
pub use rule::Rule;
