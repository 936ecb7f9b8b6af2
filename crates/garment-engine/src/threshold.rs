//! Threshold solver ("water-filling")
//!
//! Given caps `d_1 … d_n ≥ 0` and a target `T ∈ [0, Σd]`, find the level `λ`
//! with `Σ min(d_i, λ) = T`. The left side is continuous, non-decreasing and
//! piecewise linear, with breakpoints at the cap values; between the `k`-th and
//! `(k+1)`-th smallest caps it equals `P_k + (n - k)·λ`, where `P_k` is the sum of
//! the `k` smallest caps. Sorting plus a binary search over the breakpoints
//! finds the segment holding `T`, and one exact division solves it.

use crate::error::DomainError;
use garment_domain::Amount;

/// `Σ min(d_i, level)`
pub fn capped_sum(caps: &[Amount], level: &Amount) -> Amount {
    caps.iter().map(|cap| cap.min_ref(level)).sum()
}

/// Solve `Σ min(d_i, λ) = target` for the smallest `λ ≥ 0`
///
/// The level is unique whenever `target < Σd`; at `target = Σd` every level
/// from `max d` up works and `max d` is returned. Tied caps form a single
/// breakpoint.
///
/// # Errors
///
/// [`DomainError::NegativeCap`] for a cap below zero and
/// [`DomainError::TargetOutOfRange`] for a target outside `[0, Σd]`.
///
/// # Examples
///
/// ```
/// use garment_domain::Amount;
/// use garment_engine::threshold::solve_threshold;
///
/// let caps: Vec<Amount> = [50, 100, 150].into_iter().map(Amount::from_integer).collect();
/// let level = solve_threshold(&caps, &Amount::from_integer(200)).unwrap();
/// assert_eq!(level, Amount::from_integer(75));
/// ```
pub fn solve_threshold(caps: &[Amount], target: &Amount) -> Result<Amount, DomainError> {
    if let Some((index, cap)) = caps.iter().enumerate().find(|(_, cap)| cap.is_negative()) {
        return Err(DomainError::NegativeCap {
            index,
            cap: cap.clone(),
        });
    }

    let total: Amount = caps.iter().sum();
    if target.is_negative() || target > &total {
        return Err(DomainError::TargetOutOfRange {
            target: target.clone(),
            total,
        });
    }

    if target.is_zero() {
        return Ok(Amount::zero());
    }

    let mut sorted: Vec<&Amount> = caps.iter().collect();
    sorted.sort();

    // A positive target means at least one positive cap
    let n = sorted.len();
    let largest = sorted[n - 1];
    if target == &total {
        return Ok(largest.clone());
    }

    // breakpoints[k] = f(d_(k)) = P_k + (n - k)·d_(k), non-decreasing in k
    let mut breakpoints = Vec::with_capacity(n);
    let mut saturated = Amount::zero();
    for (k, cap) in sorted.iter().enumerate() {
        let free = Amount::from_integer((n - k) as i64);
        breakpoints.push(&saturated + &free * *cap);
        saturated = saturated + *cap;
    }

    // First breakpoint reaching the target; exists because f(d_(n)) = Σd > T
    let k = breakpoints.partition_point(|value| value < target);

    let mut prefix = Amount::zero();
    for cap in &sorted[..k] {
        prefix = prefix + *cap;
    }
    let free = Amount::from_integer((n - k) as i64);
    Ok((target - &prefix) / free)
}
