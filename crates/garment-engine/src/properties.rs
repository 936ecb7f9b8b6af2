//! Axiomatic checks for division rules
//!
//! Every check returns the violations it found; an empty list means the
//! property holds on the given input. The checks are exhaustive over claimant
//! pairs and meant for tests and audits, not for the hot path.

use crate::traits::DivisionRule;
use garment_domain::{Allocation, Amount, ClaimId, ClaimSet};
use std::fmt::Display;
use thiserror::Error;

/// A property a rule failed to satisfy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyViolation {
    /// Awards do not line up with the claims
    #[error("Allocation has {actual} awards for {expected} claims")]
    Misaligned {
        /// Number of claims
        expected: usize,
        /// Number of awards
        actual: usize,
    },

    /// Awards do not sum to the estate
    #[error("Awards total {total} but the estate is {estate}")]
    Inefficient {
        /// Sum of awards
        total: Amount,
        /// Estate
        estate: Amount,
    },

    /// An award is negative or above `min(claim, estate)`
    #[error("Award {award} to {id} is outside [0, {bound}]")]
    OutOfBounds {
        /// Claimant
        id: ClaimId,
        /// Award
        award: Amount,
        /// `min(claim, estate)`
        bound: Amount,
    },

    /// A smaller claim received more
    #[error("{smaller} claims no more than {larger} but is awarded more")]
    AwardOrder {
        /// Claimant with the smaller claim
        smaller: ClaimId,
        /// Claimant with the larger claim
        larger: ClaimId,
    },

    /// A smaller claim lost more
    #[error("{smaller} claims no more than {larger} but loses more")]
    LossOrder {
        /// Claimant with the smaller claim
        smaller: ClaimId,
        /// Claimant with the larger claim
        larger: ClaimId,
    },

    /// `x_i(E) + x_i(C - E) != c_i`
    #[error("{id}: awards at E and C-E sum to {sum}, not the claim {claim}")]
    NotSelfDual {
        /// Claimant
        id: ClaimId,
        /// `x_i(E) + x_i(C - E)`
        sum: Amount,
        /// `c_i`
        claim: Amount,
    },

    /// Scaling the problem did not scale the awards
    #[error("Scaling by {factor} changed the division")]
    NotScaleInvariant {
        /// Factor applied
        factor: Amount,
    },

    /// The rule or the derived problem could not be evaluated
    #[error("Evaluation failed: {0}")]
    Evaluation(String),
}

/// `Σx = E`
pub fn check_efficiency(claims: &ClaimSet, allocation: &Allocation) -> Vec<PropertyViolation> {
    let total = allocation.total();
    if &total == claims.estate() {
        Vec::new()
    } else {
        vec![PropertyViolation::Inefficient {
            total,
            estate: claims.estate().clone(),
        }]
    }
}

/// `0 <= x_i <= min(c_i, E)`
pub fn check_bounds(claims: &ClaimSet, allocation: &Allocation) -> Vec<PropertyViolation> {
    if let Some(violation) = misaligned(claims, allocation) {
        return vec![violation];
    }

    claims
        .claims()
        .iter()
        .zip(allocation.awards())
        .filter_map(|(claim, award)| {
            let bound = claim.amount.min_ref(claims.estate());
            if award.is_negative() || award > bound {
                Some(PropertyViolation::OutOfBounds {
                    id: claim.id,
                    award: award.clone(),
                    bound: bound.clone(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// `c_i <= c_j` implies `x_i <= x_j` and `c_i - x_i <= c_j - x_j`
pub fn check_order_preservation(
    claims: &ClaimSet,
    allocation: &Allocation,
) -> Vec<PropertyViolation> {
    if let Some(violation) = misaligned(claims, allocation) {
        return vec![violation];
    }

    let amounts = claims.amounts();
    let awards = allocation.awards();
    let losses = allocation.losses(claims);
    let mut violations = Vec::new();

    for i in 0..amounts.len() {
        for j in 0..amounts.len() {
            if i == j || amounts[i] > amounts[j] {
                continue;
            }
            let (smaller, larger) = (ClaimId::from_value(i), ClaimId::from_value(j));
            if awards[i] > awards[j] {
                violations.push(PropertyViolation::AwardOrder { smaller, larger });
            }
            if losses[i] > losses[j] {
                violations.push(PropertyViolation::LossOrder { smaller, larger });
            }
        }
    }
    violations
}

/// `x_i(E) + x_i(C - E) = c_i` for every claimant
///
/// Only self-dual rules (proportional, Talmud) are expected to pass.
pub fn check_self_duality<R>(rule: &R, claims: &ClaimSet) -> Vec<PropertyViolation>
where
    R: DivisionRule,
    R::Error: Display,
{
    let (direct, dual) = match (rule.divide(claims), rule.divide(&claims.dual())) {
        (Ok(direct), Ok(dual)) => (direct, dual),
        (Err(e), _) | (_, Err(e)) => return vec![evaluation(e)],
    };
    if let Some(violation) = misaligned(claims, &direct).or_else(|| misaligned(claims, &dual)) {
        return vec![violation];
    }

    claims
        .claims()
        .iter()
        .zip(direct.awards().iter().zip(dual.awards()))
        .filter_map(|(claim, (x, y))| {
            let sum = x + y;
            if sum == claim.amount {
                None
            } else {
                Some(PropertyViolation::NotSelfDual {
                    id: claim.id,
                    sum,
                    claim: claim.amount.clone(),
                })
            }
        })
        .collect()
}

/// `rule(k·c, k·E) = k · rule(c, E)` for a positive `factor`
pub fn check_scale_invariance<R>(
    rule: &R,
    claims: &ClaimSet,
    factor: &Amount,
) -> Vec<PropertyViolation>
where
    R: DivisionRule,
    R::Error: Display,
{
    if !factor.is_positive() {
        return vec![PropertyViolation::Evaluation(format!(
            "scale factor {} is not positive",
            factor
        ))];
    }
    let scaled_claims = match claims.scaled(factor) {
        Ok(scaled) => scaled,
        Err(e) => return vec![evaluation(e)],
    };
    match (rule.divide(claims), rule.divide(&scaled_claims)) {
        (Ok(base), Ok(scaled)) if base.scaled(factor) == scaled => Vec::new(),
        (Ok(_), Ok(_)) => vec![PropertyViolation::NotScaleInvariant {
            factor: factor.clone(),
        }],
        (Err(e), _) | (_, Err(e)) => vec![evaluation(e)],
    }
}

/// Efficiency, bounds, order preservation and scale invariance
///
/// Self-duality is left to [`check_self_duality`] since CEA and CEL are not
/// expected to have it.
pub fn check_all<R>(rule: &R, claims: &ClaimSet) -> Vec<PropertyViolation>
where
    R: DivisionRule,
    R::Error: Display,
{
    let allocation = match rule.divide(claims) {
        Ok(allocation) => allocation,
        Err(e) => return vec![evaluation(e)],
    };

    let mut violations = check_efficiency(claims, &allocation);
    violations.extend(check_bounds(claims, &allocation));
    violations.extend(check_order_preservation(claims, &allocation));
    for factor in [Amount::from_integer(3), Amount::one().halve()] {
        violations.extend(check_scale_invariance(rule, claims, &factor));
    }
    violations
}

fn misaligned(claims: &ClaimSet, allocation: &Allocation) -> Option<PropertyViolation> {
    (claims.len() != allocation.len()).then(|| PropertyViolation::Misaligned {
        expected: claims.len(),
        actual: allocation.len(),
    })
}

fn evaluation(error: impl Display) -> PropertyViolation {
    PropertyViolation::Evaluation(error.to_string())
}
