//! Allocation module - the output of every division rule

use crate::{Amount, ClaimId, ClaimSet};

/// Awards aligned positionally with the claims of a [`ClaimSet`]
///
/// Produced fresh by each rule evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    awards: Vec<Amount>,
}

impl Allocation {
    /// Wrap a vector of awards, one per claimant in claim order
    pub fn new(awards: Vec<Amount>) -> Self {
        Self { awards }
    }

    /// An all-zero allocation for `len` claimants
    pub fn zeros(len: usize) -> Self {
        Self {
            awards: vec![Amount::zero(); len],
        }
    }

    /// Awards in claim order
    pub fn awards(&self) -> &[Amount] {
        &self.awards
    }

    /// Award of a single claimant
    pub fn get(&self, id: ClaimId) -> Option<&Amount> {
        self.awards.get(id.value())
    }

    /// Iterate `(claimant, award)` pairs in claim order
    pub fn iter(&self) -> impl Iterator<Item = (ClaimId, &Amount)> {
        self.awards
            .iter()
            .enumerate()
            .map(|(index, award)| (ClaimId::from_value(index), award))
    }

    /// Sum of all awards
    pub fn total(&self) -> Amount {
        self.awards.iter().sum()
    }

    /// Number of awards
    pub fn len(&self) -> usize {
        self.awards.len()
    }

    /// Whether there are no awards
    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }

    /// Loss borne by each claimant (`c_i - x_i`)
    ///
    /// # Panics
    /// Panics if `claims` has a different number of claimants.
    pub fn losses(&self, claims: &ClaimSet) -> Vec<Amount> {
        assert_eq!(
            claims.len(),
            self.awards.len(),
            "allocation and claim set must have the same claimants"
        );
        claims
            .claims()
            .iter()
            .zip(&self.awards)
            .map(|(claim, award)| &claim.amount - award)
            .collect()
    }

    /// Every award multiplied by `factor`
    pub fn scaled(&self, factor: &Amount) -> Self {
        Self {
            awards: self.awards.iter().map(|a| a * factor).collect(),
        }
    }

    /// Consume into the award vector
    pub fn into_awards(self) -> Vec<Amount> {
        self.awards
    }
}
