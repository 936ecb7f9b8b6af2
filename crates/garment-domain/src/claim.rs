//! Claims and claim sets - the input to every division rule

use crate::{Amount, ClaimError};
use std::fmt;

/// Identifier of a claimant: its zero-based position in the claim set
///
/// The position carries no meaning for the arithmetic; it only keeps awards
/// aligned with the claims they answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimId(usize);

impl ClaimId {
    /// Create a ClaimId from a claimant index
    pub fn from_value(value: usize) -> Self {
        Self(value)
    }

    /// Get the claimant index
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single claim against the estate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// Claimant position
    pub id: ClaimId,

    /// Amount asserted as owed (never negative inside a [`ClaimSet`])
    pub amount: Amount,
}

/// A validated division problem: ordered claims and the estate to split
///
/// Immutable once built. Construction rejects negative values, an empty claim
/// list with something to divide, and an estate larger than the total claimed.
///
/// # Examples
///
/// ```
/// use garment_domain::{Amount, ClaimSet};
///
/// let set = ClaimSet::from_integers(&[100, 50], 100).unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.total_claims(), &Amount::from_integer(150));
/// assert_eq!(set.shortfall(), Amount::from_integer(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSet {
    claims: Vec<Claim>,
    estate: Amount,
    total: Amount,
}

impl ClaimSet {
    /// Validate and build a claim set
    pub fn new(amounts: Vec<Amount>, estate: Amount) -> Result<Self, ClaimError> {
        if estate.is_negative() {
            return Err(ClaimError::NegativeEstate(estate));
        }

        let mut claims = Vec::with_capacity(amounts.len());
        for (index, amount) in amounts.into_iter().enumerate() {
            let id = ClaimId::from_value(index);
            if amount.is_negative() {
                return Err(ClaimError::NegativeClaim { id, amount });
            }
            claims.push(Claim { id, amount });
        }

        if claims.is_empty() && !estate.is_zero() {
            return Err(ClaimError::EmptyClaims(estate));
        }

        let total: Amount = claims.iter().map(|c| &c.amount).sum();
        if estate > total {
            return Err(ClaimError::EstateExceedsClaims { estate, total });
        }

        Ok(Self {
            claims,
            estate,
            total,
        })
    }

    /// Convenience constructor for whole-number problems
    pub fn from_integers(claims: &[i64], estate: i64) -> Result<Self, ClaimError> {
        Self::new(
            claims.iter().copied().map(Amount::from_integer).collect(),
            Amount::from_integer(estate),
        )
    }

    /// The claims, in input order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Claim amounts, in input order
    pub fn amounts(&self) -> Vec<Amount> {
        self.claims.iter().map(|c| c.amount.clone()).collect()
    }

    /// Look up a claim by claimant
    pub fn get(&self, id: ClaimId) -> Option<&Claim> {
        self.claims.get(id.value())
    }

    /// The estate to divide
    pub fn estate(&self) -> &Amount {
        &self.estate
    }

    /// Sum of all claims (`C`)
    pub fn total_claims(&self) -> &Amount {
        &self.total
    }

    /// Total loss the claimants must absorb (`C - E`)
    pub fn shortfall(&self) -> Amount {
        &self.total - &self.estate
    }

    /// Number of claimants
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether there are no claimants
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Same claims against a different estate
    pub fn with_estate(&self, estate: Amount) -> Result<Self, ClaimError> {
        Self::new(self.amounts(), estate)
    }

    /// Same claims against the complementary estate `C - E`
    pub fn dual(&self) -> Self {
        Self {
            claims: self.claims.clone(),
            estate: self.shortfall(),
            total: self.total.clone(),
        }
    }

    /// Every claim and the estate multiplied by `factor`
    ///
    /// A negative factor is rejected by the usual validation.
    pub fn scaled(&self, factor: &Amount) -> Result<Self, ClaimError> {
        Self::new(
            self.claims.iter().map(|c| &c.amount * factor).collect(),
            &self.estate * factor,
        )
    }

    /// Claims that exceed the estate
    pub fn oversized(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter().filter(move |c| c.amount > self.estate)
    }

    /// Every claim truncated to the estate (`min(c_i, E)`)
    ///
    /// Nobody can be awarded more than the whole estate, so the excess carries
    /// no weight. The result is always a valid claim set.
    pub fn truncated_to_estate(&self) -> Self {
        let claims: Vec<Claim> = self
            .claims
            .iter()
            .map(|c| Claim {
                id: c.id,
                amount: c.amount.min_ref(&self.estate).clone(),
            })
            .collect();
        let total: Amount = claims.iter().map(|c| &c.amount).sum();
        Self {
            claims,
            estate: self.estate.clone(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_ordering() {
        let id1 = ClaimId::from_value(0);
        let id2 = ClaimId::from_value(3);

        assert!(id1 < id2);
        assert_eq!(id2.value(), 3);
        assert_eq!(id2.to_string(), "#3");
    }

    #[test]
    fn test_valid_claim_set() {
        let set = ClaimSet::from_integers(&[100, 200, 300], 200).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.estate(), &Amount::from_integer(200));
        assert_eq!(set.total_claims(), &Amount::from_integer(600));
        assert_eq!(set.claims()[1].id, ClaimId::from_value(1));
        assert_eq!(
            set.get(ClaimId::from_value(2)).map(|c| c.amount.clone()),
            Some(Amount::from_integer(300))
        );
        assert!(set.get(ClaimId::from_value(3)).is_none());
    }

    #[test]
    fn test_negative_claim_rejected() {
        let err = ClaimSet::from_integers(&[10, -1], 5).unwrap_err();
        assert_eq!(
            err,
            ClaimError::NegativeClaim {
                id: ClaimId::from_value(1),
                amount: Amount::from_integer(-1),
            }
        );
    }

    #[test]
    fn test_negative_estate_rejected() {
        let err = ClaimSet::from_integers(&[10], -5).unwrap_err();
        assert_eq!(err, ClaimError::NegativeEstate(Amount::from_integer(-5)));
    }

    #[test]
    fn test_empty_claims() {
        assert!(ClaimSet::from_integers(&[], 0).unwrap().is_empty());
        assert_eq!(
            ClaimSet::from_integers(&[], 1).unwrap_err(),
            ClaimError::EmptyClaims(Amount::from_integer(1))
        );
    }

    #[test]
    fn test_estate_exceeding_claims_rejected() {
        assert!(matches!(
            ClaimSet::from_integers(&[10, 20], 31),
            Err(ClaimError::EstateExceedsClaims { .. })
        ));
        assert!(ClaimSet::from_integers(&[10, 20], 30).is_ok());
    }

    #[test]
    fn test_dual_uses_shortfall() {
        let set = ClaimSet::from_integers(&[100, 50], 100).unwrap();
        let dual = set.dual();
        assert_eq!(dual.estate(), &Amount::from_integer(50));
        assert_eq!(dual.dual(), set);
    }

    #[test]
    fn test_truncation_and_oversized() {
        let set = ClaimSet::from_integers(&[50, 150, 400], 100).unwrap();
        let oversized: Vec<ClaimId> = set.oversized().map(|c| c.id).collect();
        assert_eq!(oversized, vec![ClaimId::from_value(1), ClaimId::from_value(2)]);

        let truncated = set.truncated_to_estate();
        assert_eq!(
            truncated.amounts(),
            vec![
                Amount::from_integer(50),
                Amount::from_integer(100),
                Amount::from_integer(100)
            ]
        );
        assert_eq!(truncated.total_claims(), &Amount::from_integer(250));
        assert_eq!(truncated.oversized().count(), 0);
    }

    #[test]
    fn test_scaled() {
        let set = ClaimSet::from_integers(&[3, 6], 4).unwrap();
        let half = Amount::from_ratio(1, 2).unwrap();
        let scaled = set.scaled(&half).unwrap();
        assert_eq!(scaled.estate(), &Amount::from_integer(2));
        assert_eq!(scaled.total_claims(), &Amount::from_ratio(9, 2).unwrap());
        assert!(set.scaled(&Amount::from_integer(-1)).is_err());
    }
}
