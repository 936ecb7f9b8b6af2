//! The division engine
//!
//! Applies the configured over-estate policy, then hands the claims to a rule.

use crate::config::{EngineConfig, OverEstatePolicy};
use crate::error::EngineError;
use crate::rules;
use garment_domain::{Allocation, Amount, ClaimSet, Rule};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Front door for dividing estates
///
/// # Examples
///
/// ```
/// use garment_domain::{Amount, ClaimSet, Rule};
/// use garment_engine::{Engine, EngineConfig};
///
/// let engine = Engine::new(EngineConfig::default());
/// let claims = ClaimSet::from_integers(&[100, 50], 100).unwrap();
/// let allocation = engine.divide(&claims, Rule::Talmud).unwrap();
/// assert_eq!(allocation.awards(), &[Amount::from_integer(75), Amount::from_integer(25)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Divide the estate with `rule`
    ///
    /// Awards line up with the caller's claims, whatever truncation the
    /// over-estate policy applied to the rule's input.
    pub fn divide(&self, claims: &ClaimSet, rule: Rule) -> Result<Allocation, EngineError> {
        let input = self.apply_policy(claims)?;
        let allocation = rules::evaluate(rule, &input)?;
        debug!(
            "Divided {} among {} claimants with {}",
            claims.estate(),
            claims.len(),
            rule
        );
        Ok(allocation)
    }

    /// Divide with the configured default rule
    pub fn divide_default(&self, claims: &ClaimSet) -> Result<Allocation, EngineError> {
        self.divide(claims, self.config.default_rule)
    }

    /// Every built-in rule, in [`Rule::ALL`] order
    pub fn compare(&self, claims: &ClaimSet) -> Result<Vec<(Rule, Allocation)>, EngineError> {
        let input = self.apply_policy(claims)?;
        Rule::ALL
            .iter()
            .map(|&rule| Ok((rule, rules::evaluate(rule, &input)?)))
            .collect()
    }

    /// Convert a float with the configured denominator bound
    pub fn amount_from_f64(&self, value: f64) -> Result<Amount, EngineError> {
        Ok(Amount::from_f64(value, self.config.max_denominator)?)
    }

    /// Build a claim set from text amounts (`"42"`, `"200/3"`, `"12.5"`)
    pub fn parse_claims<S: AsRef<str>>(
        &self,
        claims: &[S],
        estate: &str,
    ) -> Result<ClaimSet, EngineError> {
        let amounts = claims
            .iter()
            .map(|claim| claim.as_ref().trim().parse::<Amount>())
            .collect::<Result<Vec<_>, _>>()?;
        let estate = estate.trim().parse::<Amount>()?;
        Ok(ClaimSet::new(amounts, estate)?)
    }

    fn apply_policy<'a>(&self, claims: &'a ClaimSet) -> Result<Cow<'a, ClaimSet>, EngineError> {
        let Some(first) = claims.oversized().next() else {
            return Ok(Cow::Borrowed(claims));
        };

        match self.config.over_estate {
            OverEstatePolicy::Reject => Err(EngineError::OverEstate {
                id: first.id,
                claim: first.amount.clone(),
                estate: claims.estate().clone(),
            }),
            OverEstatePolicy::Warn => {
                for claim in claims.oversized() {
                    warn!(
                        "Claim {} of {} exceeds the estate {}; truncating",
                        claim.id,
                        claim.amount,
                        claims.estate()
                    );
                }
                Ok(Cow::Owned(claims.truncated_to_estate()))
            }
            OverEstatePolicy::Cap => Ok(Cow::Owned(claims.truncated_to_estate())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garment_domain::{AmountError, ClaimId};

    fn set(claims: &[i64], estate: i64) -> ClaimSet {
        ClaimSet::from_integers(claims, estate).unwrap()
    }

    fn ints(values: &[i64]) -> Vec<Amount> {
        values.iter().copied().map(Amount::from_integer).collect()
    }

    #[test]
    fn test_divide_talmud() {
        let engine = Engine::default_config();
        let allocation = engine.divide(&set(&[100, 200, 300], 200), Rule::Talmud).unwrap();
        assert_eq!(allocation.into_awards(), ints(&[50, 75, 75]));
    }

    #[test]
    fn test_divide_default_uses_config() {
        let engine = Engine::new(EngineConfig {
            default_rule: Rule::Cea,
            ..EngineConfig::default()
        });
        let allocation = engine.divide_default(&set(&[100, 200, 300, 400], 700)).unwrap();
        assert_eq!(allocation.into_awards(), ints(&[100, 200, 200, 200]));
    }

    #[test]
    fn test_cap_truncates_input_only() {
        // Proportional over {60, 60}, not {60, 100}
        let engine = Engine::default_config();
        let claims = set(&[60, 100], 60);
        let allocation = engine.divide(&claims, Rule::Proportional).unwrap();
        assert_eq!(allocation.len(), claims.len());
        assert_eq!(allocation.into_awards(), ints(&[30, 30]));
    }

    #[test]
    fn test_warn_truncates() {
        let engine = Engine::new(EngineConfig::audited());
        let allocation = engine.divide(&set(&[60, 100], 60), Rule::Proportional).unwrap();
        assert_eq!(allocation.into_awards(), ints(&[30, 30]));
    }

    #[test]
    fn test_reject_policy() {
        let engine = Engine::new(EngineConfig::strict());
        let err = engine.divide(&set(&[50, 150, 400], 100), Rule::Cea).unwrap_err();
        assert_eq!(
            err,
            EngineError::OverEstate {
                id: ClaimId::from_value(1),
                claim: Amount::from_integer(150),
                estate: Amount::from_integer(100),
            }
        );
        assert_eq!(err.to_string(), "Claim #1 of 150 exceeds the estate 100");

        // A claim equal to the estate is fine
        assert!(engine.divide(&set(&[100, 100], 100), Rule::Cea).is_ok());
    }

    #[test]
    fn test_compare_order() {
        let engine = Engine::default_config();
        let results = engine.compare(&set(&[100, 200, 300, 400], 700)).unwrap();
        let rules: Vec<Rule> = results.iter().map(|(rule, _)| *rule).collect();
        assert_eq!(rules, Rule::ALL.to_vec());
        assert_eq!(results[0].1.awards(), ints(&[70, 140, 210, 280]).as_slice());
        assert_eq!(results[2].1.awards(), ints(&[25, 125, 225, 325]).as_slice());
    }

    #[test]
    fn test_compare_respects_reject() {
        let engine = Engine::new(EngineConfig::strict());
        assert!(engine.compare(&set(&[10, 200], 100)).is_err());
    }

    #[test]
    fn test_parse_claims() {
        let engine = Engine::default_config();
        let claims = engine.parse_claims(&["100", " 200/3 ", "12.5"], "50").unwrap();
        assert_eq!(claims.amounts()[1], Amount::from_ratio(200, 3).unwrap());
        assert_eq!(claims.estate(), &Amount::from_integer(50));

        assert!(matches!(
            engine.parse_claims(&["abc"], "1"),
            Err(EngineError::Amount(AmountError::Malformed(_)))
        ));
        assert!(matches!(
            engine.parse_claims(&["10"], "11"),
            Err(EngineError::Claim(_))
        ));
    }

    #[test]
    fn test_amount_from_f64_uses_bound() {
        let engine = Engine::new(EngineConfig {
            max_denominator: 10,
            ..EngineConfig::default()
        });
        assert_eq!(
            engine.amount_from_f64(2.5).unwrap(),
            Amount::from_ratio(5, 2).unwrap()
        );
        assert!(matches!(
            engine.amount_from_f64(0.01),
            Err(EngineError::Amount(AmountError::Precision { .. }))
        ));
    }
}
