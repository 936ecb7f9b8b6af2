//! Trait definitions for division rules
//!
//! Adapters such as [`crate::Dual`] and the checks in [`crate::properties`] work
//! over any implementation, not just the built-in [`garment_domain::Rule`] set.

use garment_domain::{Allocation, ClaimSet};

/// A pure division rule
///
/// Implementations must be deterministic: the same claim set always yields the
/// same allocation.
pub trait DivisionRule {
    /// Error type for rule evaluation
    type Error;

    /// Short identifier used in logs and reports
    fn name(&self) -> String;

    /// Divide the estate among the claimants
    fn divide(&self, claims: &ClaimSet) -> Result<Allocation, Self::Error>;
}

impl<R: DivisionRule + ?Sized> DivisionRule for &R {
    type Error = R::Error;

    fn name(&self) -> String {
        (**self).name()
    }

    fn divide(&self, claims: &ClaimSet) -> Result<Allocation, Self::Error> {
        (**self).divide(claims)
    }
}
