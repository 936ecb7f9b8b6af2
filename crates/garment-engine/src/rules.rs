//! Division rules
//!
//! Each rule is a pure function of a validated [`ClaimSet`]. The capped rules are
//! all built on [`solve_threshold`]; none of them re-validates its input.

use crate::error::DomainError;
use crate::threshold::solve_threshold;
use crate::traits::DivisionRule;
use garment_domain::{Allocation, Amount, ClaimSet, Rule};

/// Evaluate `rule` on `claims`
pub fn evaluate(rule: Rule, claims: &ClaimSet) -> Result<Allocation, DomainError> {
    match rule {
        Rule::Proportional => Ok(proportional(claims)),
        Rule::Cea => constrained_equal_awards(claims),
        Rule::Cel => constrained_equal_losses(claims),
        Rule::Talmud => talmud(claims),
    }
}

/// `x_i = E · c_i / C`; all zero when nothing is claimed
pub fn proportional(claims: &ClaimSet) -> Allocation {
    let total = claims.total_claims();
    if total.is_zero() {
        return Allocation::zeros(claims.len());
    }
    let ratio = claims.estate() / total;
    Allocation::new(
        claims
            .claims()
            .iter()
            .map(|claim| &claim.amount * &ratio)
            .collect(),
    )
}

/// Equal awards up to each claim: `x_i = min(c_i, λ)`, `Σx = E`
pub fn constrained_equal_awards(claims: &ClaimSet) -> Result<Allocation, DomainError> {
    Ok(Allocation::new(equal_awards(
        &claims.amounts(),
        claims.estate(),
    )?))
}

/// Equal losses up to each claim: `x_i = c_i - min(c_i, μ)`, `Σx = E`
pub fn constrained_equal_losses(claims: &ClaimSet) -> Result<Allocation, DomainError> {
    let amounts = claims.amounts();
    let losses = equal_awards(&amounts, &claims.shortfall())?;
    Ok(Allocation::new(complement(&amounts, losses)))
}

/// The n-claimant contested-garment rule
///
/// With half-claims `h_i = c_i / 2`: while the estate is at most half the total
/// claim, award CEA over the halves; past that point, hand the shortfall out as
/// CEA losses over the halves instead. The two branches meet at `E = C/2`,
/// where everybody receives exactly half of their claim.
///
/// # Examples
///
/// ```
/// use garment_domain::{Amount, ClaimSet};
/// use garment_engine::rules::talmud;
///
/// let claims = ClaimSet::from_integers(&[100, 200, 300], 200).unwrap();
/// let awards = talmud(&claims).unwrap().into_awards();
/// assert_eq!(awards, vec![
///     Amount::from_integer(50),
///     Amount::from_integer(75),
///     Amount::from_integer(75),
/// ]);
/// ```
pub fn talmud(claims: &ClaimSet) -> Result<Allocation, DomainError> {
    let amounts = claims.amounts();
    let halves: Vec<Amount> = amounts.iter().map(Amount::halve).collect();
    let estate = claims.estate();

    if &(estate + estate) <= claims.total_claims() {
        Ok(Allocation::new(equal_awards(&halves, estate)?))
    } else {
        let losses = equal_awards(&halves, &claims.shortfall())?;
        Ok(Allocation::new(complement(&amounts, losses)))
    }
}

/// `min(cap_i, λ)` with `λ` solving `Σ min(cap_i, λ) = target`
fn equal_awards(caps: &[Amount], target: &Amount) -> Result<Vec<Amount>, DomainError> {
    let level = solve_threshold(caps, target)?;
    Ok(caps.iter().map(|cap| cap.min_ref(&level).clone()).collect())
}

/// `c_i - y_i`
fn complement(claims: &[Amount], taken: Vec<Amount>) -> Vec<Amount> {
    claims
        .iter()
        .zip(taken)
        .map(|(claim, loss)| claim - loss)
        .collect()
}

impl DivisionRule for Rule {
    type Error = DomainError;

    fn name(&self) -> String {
        self.as_str().to_string()
    }

    fn divide(&self, claims: &ClaimSet) -> Result<Allocation, Self::Error> {
        evaluate(*self, claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(claims: &[i64], estate: i64) -> ClaimSet {
        ClaimSet::from_integers(claims, estate).unwrap()
    }

    fn ints(values: &[i64]) -> Vec<Amount> {
        values.iter().copied().map(Amount::from_integer).collect()
    }

    fn ratio(n: i64, d: i64) -> Amount {
        Amount::from_ratio(n, d).unwrap()
    }

    #[test]
    fn test_proportional() {
        let awards = proportional(&set(&[100, 200, 300, 400], 700)).into_awards();
        assert_eq!(awards, ints(&[70, 140, 210, 280]));
    }

    #[test]
    fn test_proportional_fractional() {
        let awards = proportional(&set(&[100, 50], 100)).into_awards();
        assert_eq!(awards, vec![ratio(200, 3), ratio(100, 3)]);
    }

    #[test]
    fn test_proportional_nothing_claimed() {
        let awards = proportional(&set(&[0, 0], 0)).into_awards();
        assert_eq!(awards, ints(&[0, 0]));
    }

    #[test]
    fn test_cea() {
        let awards = constrained_equal_awards(&set(&[100, 200, 300, 400], 700))
            .unwrap()
            .into_awards();
        assert_eq!(awards, ints(&[100, 200, 200, 200]));
    }

    #[test]
    fn test_cel() {
        let awards = constrained_equal_losses(&set(&[100, 200, 300, 400], 700))
            .unwrap()
            .into_awards();
        assert_eq!(awards, ints(&[25, 125, 225, 325]));
    }

    #[test]
    fn test_cel_zeroes_small_claims() {
        // Shortfall 250: a third each would overdraw the first claim
        let awards = constrained_equal_losses(&set(&[50, 200, 300], 300))
            .unwrap()
            .into_awards();
        assert_eq!(awards, ints(&[0, 100, 200]));
    }

    #[test]
    fn test_talmud_mishnah_cases() {
        // Ketubot 93a: claims 100, 200, 300
        assert_eq!(
            talmud(&set(&[100, 200, 300], 100)).unwrap().into_awards(),
            vec![ratio(100, 3), ratio(100, 3), ratio(100, 3)]
        );
        assert_eq!(
            talmud(&set(&[100, 200, 300], 200)).unwrap().into_awards(),
            ints(&[50, 75, 75])
        );
        assert_eq!(
            talmud(&set(&[100, 200, 300], 300)).unwrap().into_awards(),
            ints(&[50, 100, 150])
        );
    }

    #[test]
    fn test_talmud_contested_garment() {
        assert_eq!(
            talmud(&set(&[100, 50], 100)).unwrap().into_awards(),
            ints(&[75, 25])
        );
        assert_eq!(
            talmud(&set(&[100, 100], 100)).unwrap().into_awards(),
            ints(&[50, 50])
        );
    }

    #[test]
    fn test_talmud_upper_branch() {
        // C = 1000, E = 700: losses CEA over halves with shortfall 300
        let awards = talmud(&set(&[100, 200, 300, 400], 700)).unwrap().into_awards();
        assert_eq!(
            awards,
            vec![
                Amount::from_integer(50),
                ratio(350, 3),
                ratio(650, 3),
                ratio(950, 3)
            ]
        );
    }

    #[test]
    fn test_boundaries_all_rules() {
        for rule in Rule::ALL {
            let zero = evaluate(rule, &set(&[10, 20, 30], 0)).unwrap();
            assert_eq!(zero.into_awards(), ints(&[0, 0, 0]), "{} at zero", rule);

            let full = evaluate(rule, &set(&[10, 20, 30], 60)).unwrap();
            assert_eq!(full.into_awards(), ints(&[10, 20, 30]), "{} at full", rule);
        }
    }

    #[test]
    fn test_empty_claim_set() {
        for rule in Rule::ALL {
            let allocation = evaluate(rule, &set(&[], 0)).unwrap();
            assert!(allocation.is_empty());
        }
    }

    #[test]
    fn test_division_rule_impl() {
        let claims = set(&[100, 50], 100);
        assert_eq!(Rule::Talmud.name(), "talmud");
        assert_eq!(
            Rule::Talmud.divide(&claims).unwrap(),
            talmud(&claims).unwrap()
        );
    }
}
