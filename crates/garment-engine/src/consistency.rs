//! Contested garment and bilateral consistency
//!
//! Two claimants hold a garment; each concedes to the other whatever part of the
//! estate lies beyond their own claim, and what remains contested is split
//! equally. The Talmud rule is the unique n-claimant rule whose awards, for
//! every pair of claimants, are exactly what this two-party rule would give them
//! out of their combined award.

use garment_domain::{Allocation, Amount, ClaimError, ClaimId, ClaimSet};

/// Concede-and-divide between two claimants
///
/// # Errors
///
/// Same validation as [`ClaimSet::new`]: non-negative inputs and an estate no
/// larger than `first + second`.
///
/// # Examples
///
/// ```
/// use garment_domain::Amount;
/// use garment_engine::consistency::concede_and_divide;
///
/// let (a, b) = concede_and_divide(
///     &Amount::from_integer(50),
///     &Amount::from_integer(100),
///     &Amount::from_integer(100),
/// ).unwrap();
/// assert_eq!((a, b), (Amount::from_integer(25), Amount::from_integer(75)));
/// ```
pub fn concede_and_divide(
    first: &Amount,
    second: &Amount,
    estate: &Amount,
) -> Result<(Amount, Amount), ClaimError> {
    ClaimSet::new(vec![first.clone(), second.clone()], estate.clone())?;

    let conceded_to_first = conceded(estate, second);
    let conceded_to_second = conceded(estate, first);
    let half_contested = (estate - &conceded_to_first - &conceded_to_second).halve();

    Ok((
        conceded_to_first + &half_contested,
        conceded_to_second + half_contested,
    ))
}

/// What a claimant of `claim` concedes: `max(E - claim, 0)`
fn conceded(estate: &Amount, claim: &Amount) -> Amount {
    if estate > claim {
        estate - claim
    } else {
        Amount::zero()
    }
}

/// The two-claimant rule applied to a whole claim set
///
/// Returns `None` unless there are exactly two claimants.
pub fn contested_garment(claims: &ClaimSet) -> Option<Allocation> {
    match claims.claims() {
        [first, second] => {
            let (a, b) = concede_and_divide(&first.amount, &second.amount, claims.estate()).ok()?;
            Some(Allocation::new(vec![a, b]))
        }
        _ => None,
    }
}

/// Pairs whose awards differ from concede-and-divide over their combined award
///
/// A pair whose combined award exceeds their combined claim is reported too.
pub fn pairwise_inconsistencies(
    claims: &ClaimSet,
    allocation: &Allocation,
) -> Vec<(ClaimId, ClaimId)> {
    let entries: Vec<(ClaimId, &Amount, &Amount)> = claims
        .claims()
        .iter()
        .zip(allocation.awards())
        .map(|(claim, award)| (claim.id, &claim.amount, award))
        .collect();

    let mut offending = Vec::new();
    for (i, (id_a, claim_a, award_a)) in entries.iter().enumerate() {
        for (id_b, claim_b, award_b) in &entries[i + 1..] {
            let combined = *award_a + *award_b;
            let consistent = match concede_and_divide(claim_a, claim_b, &combined) {
                Ok((a, b)) => &a == *award_a && &b == *award_b,
                Err(_) => false,
            };
            if !consistent {
                offending.push((*id_a, *id_b));
            }
        }
    }
    offending
}

/// Whether every pair agrees with concede-and-divide
pub fn is_bilaterally_consistent(claims: &ClaimSet, allocation: &Allocation) -> bool {
    allocation.len() == claims.len() && pairwise_inconsistencies(claims, allocation).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    fn int(value: i64) -> Amount {
        Amount::from_integer(value)
    }

    #[test]
    fn test_concede_and_divide_contested_garment() {
        // "All of it is mine" against "half of it is mine"
        assert_eq!(
            concede_and_divide(&int(100), &int(50), &int(100)).unwrap(),
            (int(75), int(25))
        );
    }

    #[test]
    fn test_concede_and_divide_nothing_conceded() {
        assert_eq!(
            concede_and_divide(&int(100), &int(200), &int(60)).unwrap(),
            (int(30), int(30))
        );
    }

    #[test]
    fn test_concede_and_divide_both_concede() {
        // Each concedes 50, the contested 100 is split
        assert_eq!(
            concede_and_divide(&int(150), &int(150), &int(200)).unwrap(),
            (int(100), int(100))
        );
        assert_eq!(
            concede_and_divide(&int(100), &int(300), &int(250)).unwrap(),
            (int(50), int(200))
        );
    }

    #[test]
    fn test_concede_and_divide_validation() {
        assert!(concede_and_divide(&int(10), &int(10), &int(21)).is_err());
        assert!(concede_and_divide(&int(-1), &int(10), &int(5)).is_err());
    }

    #[test]
    fn test_contested_garment_requires_two() {
        let two = ClaimSet::from_integers(&[100, 50], 100).unwrap();
        let three = ClaimSet::from_integers(&[100, 50, 10], 100).unwrap();
        assert_eq!(
            contested_garment(&two).unwrap().into_awards(),
            vec![int(75), int(25)]
        );
        assert!(contested_garment(&three).is_none());
    }

    #[test]
    fn test_talmud_is_consistent() {
        for estate in [100, 200, 300, 450, 599] {
            let claims = ClaimSet::from_integers(&[100, 200, 300], estate).unwrap();
            let allocation = rules::talmud(&claims).unwrap();
            assert!(
                is_bilaterally_consistent(&claims, &allocation),
                "estate {}",
                estate
            );
        }
    }

    #[test]
    fn test_proportional_is_not_consistent() {
        let claims = ClaimSet::from_integers(&[100, 50], 100).unwrap();
        let allocation = rules::proportional(&claims);
        assert_eq!(
            pairwise_inconsistencies(&claims, &allocation),
            vec![(ClaimId::from_value(0), ClaimId::from_value(1))]
        );
    }

    #[test]
    fn test_length_mismatch_is_inconsistent() {
        let claims = ClaimSet::from_integers(&[100, 50], 100).unwrap();
        assert!(!is_bilaterally_consistent(&claims, &Allocation::zeros(3)));
    }
}
