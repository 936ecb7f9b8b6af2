//! Dual rules
//!
//! The dual of a rule divides losses the way the rule itself divides awards:
//! `dual(R)(c, E)_i = c_i - R(c, C - E)_i`. CEA and CEL are each other's dual;
//! the Talmud and proportional rules are their own.

use crate::traits::DivisionRule;
use garment_domain::{Allocation, ClaimSet};

/// Adapter turning any rule into its dual
///
/// # Examples
///
/// ```
/// use garment_domain::{ClaimSet, Rule};
/// use garment_engine::{Dual, DivisionRule};
///
/// let claims = ClaimSet::from_integers(&[100, 200, 300, 400], 700).unwrap();
/// assert_eq!(
///     Dual(Rule::Cea).divide(&claims).unwrap(),
///     Rule::Cel.divide(&claims).unwrap(),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dual<R>(pub R);

impl<R: DivisionRule> DivisionRule for Dual<R> {
    type Error = R::Error;

    fn name(&self) -> String {
        format!("dual({})", self.0.name())
    }

    fn divide(&self, claims: &ClaimSet) -> Result<Allocation, Self::Error> {
        let complementary = self.0.divide(&claims.dual())?;
        Ok(Allocation::new(
            claims
                .claims()
                .iter()
                .zip(complementary.awards())
                .map(|(claim, award)| &claim.amount - award)
                .collect(),
        ))
    }
}
