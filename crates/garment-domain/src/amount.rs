//! Exact rational amounts
//!
//! Every claim, estate and award is an [`Amount`]: an arbitrary-precision rational
//! kept in canonical reduced form. Awards are compared for strict equality
//! (`Σx = E`, `x(E) + x(C-E) = c`), so nothing in the engine touches floating point.
//! Floats are accepted only through [`Amount::from_f64`], which refuses values that
//! would need a denominator larger than the caller's bound.

use crate::error::AmountError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// An exact, reduced rational quantity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigRational);

impl Amount {
    /// The zero amount
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// The unit amount
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Create an amount from an integer
    ///
    /// # Examples
    ///
    /// ```
    /// use garment_domain::Amount;
    ///
    /// assert_eq!(Amount::from_integer(7).to_string(), "7");
    /// ```
    pub fn from_integer(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }

    /// Create an amount from a numerator/denominator pair
    ///
    /// The result is reduced; a zero denominator is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use garment_domain::Amount;
    ///
    /// let third = Amount::from_ratio(100, 300).unwrap();
    /// assert_eq!(third.to_string(), "1/3");
    /// assert!(Amount::from_ratio(1, 0).is_err());
    /// ```
    pub fn from_ratio(numer: i64, denom: i64) -> Result<Self, AmountError> {
        Self::new(BigInt::from(numer), BigInt::from(denom))
    }

    /// Create an amount from big-integer numerator and denominator
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, AmountError> {
        if denom.is_zero() {
            return Err(AmountError::ZeroDenominator);
        }
        Ok(Self(BigRational::new(numer, denom)))
    }

    /// Convert a float through its shortest round-trip decimal rendering
    ///
    /// `0.1` becomes exactly `1/10`, not the binary value closest to it. The
    /// conversion fails when the reduced denominator exceeds `max_denominator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use garment_domain::Amount;
    ///
    /// let a = Amount::from_f64(12.5, 1_000).unwrap();
    /// assert_eq!(a.to_string(), "25/2");
    /// assert!(Amount::from_f64(0.0001, 1_000).is_err());
    /// ```
    pub fn from_f64(value: f64, max_denominator: u64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        // Display for f64 never uses exponent notation
        let rendered = value.to_string();
        let amount = Self::from_str(&rendered)?;
        if amount.0.denom() > &BigInt::from(max_denominator) {
            return Err(AmountError::Precision {
                value: rendered,
                max_denominator,
            });
        }
        Ok(amount)
    }

    /// Numerator of the reduced form
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator of the reduced form (always positive)
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Borrow the underlying rational
    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }

    /// Whether this amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether this amount is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Whether this amount is strictly above zero
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Whether the reduced form has denominator one
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Half of this amount
    pub fn halve(&self) -> Self {
        Self(&self.0 / BigRational::from_integer(BigInt::from(2)))
    }

    /// The smaller of two amounts, by reference
    pub fn min_ref<'a>(&'a self, other: &'a Self) -> &'a Self {
        if self <= other {
            self
        } else {
            other
        }
    }

    /// Nearest `f64`, for display only
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

impl From<BigRational> for Amount {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parse `"42"`, `"-3"`, `"200/3"` or `"12.375"` exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let malformed = || AmountError::Malformed(s.to_string());

        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let value = if let Some((whole, fraction)) = body.split_once('.') {
            if whole.is_empty() && fraction.is_empty() {
                return Err(malformed());
            }
            let whole = if whole.is_empty() {
                BigInt::zero()
            } else {
                parse_digits(whole).ok_or_else(malformed)?
            };
            let scale = num_traits::pow(BigInt::from(10), fraction.len());
            let fraction = if fraction.is_empty() {
                BigInt::zero()
            } else {
                parse_digits(fraction).ok_or_else(malformed)?
            };
            Self::new(whole * &scale + fraction, scale)?
        } else {
            // BigRational also takes "_" separators and signed denominators
            if !body.splitn(2, '/').all(is_plain_digits) {
                return Err(malformed());
            }
            let ratio = BigRational::from_str(body).map_err(|_| {
                match body.split_once('/') {
                    Some((_, denom)) if denom.bytes().all(|b| b == b'0') => {
                        AmountError::ZeroDenominator
                    }
                    _ => malformed(),
                }
            })?;
            Self(ratio)
        };

        Ok(if negative { -value } else { value })
    }
}

fn is_plain_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a non-empty run of ASCII digits
fn parse_digits(s: &str) -> Option<BigInt> {
    if !is_plain_digits(s) {
        return None;
    }
    BigInt::parse_bytes(s.as_bytes(), 10)
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<Amount> for Amount {
            type Output = Amount;
            fn $method(self, rhs: Amount) -> Amount {
                Amount(self.0.$method(rhs.0))
            }
        }

        impl<'a> $trait<&'a Amount> for Amount {
            type Output = Amount;
            fn $method(self, rhs: &'a Amount) -> Amount {
                Amount(self.0.$method(&rhs.0))
            }
        }

        impl<'a> $trait<Amount> for &'a Amount {
            type Output = Amount;
            fn $method(self, rhs: Amount) -> Amount {
                Amount((&self.0).$method(rhs.0))
            }
        }

        impl<'a, 'b> $trait<&'b Amount> for &'a Amount {
            type Output = Amount;
            fn $method(self, rhs: &'b Amount) -> Amount {
                Amount((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
// Division by a zero amount panics, as integer division does.
forward_binop!(Div, div);

impl Neg for Amount {
    type Output = Amount;
    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl<'a> Neg for &'a Amount {
    type Output = Amount;
    fn neg(self) -> Amount {
        Amount(-&self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(amt("42"), Amount::from_integer(42));
        assert_eq!(amt("-3"), Amount::from_integer(-3));
        assert_eq!(amt("+5"), Amount::from_integer(5));
        assert_eq!(amt("200/3"), Amount::from_ratio(200, 3).unwrap());
        assert_eq!(amt("12.375"), Amount::from_ratio(99, 8).unwrap());
        assert_eq!(amt(".5"), Amount::from_ratio(1, 2).unwrap());
        assert_eq!(amt("7."), Amount::from_integer(7));
        assert_eq!(amt("  10/4 "), Amount::from_ratio(5, 2).unwrap());
        assert_eq!(amt("-10/4"), Amount::from_ratio(-5, 2).unwrap());
        assert_eq!(
            amt("123456789012345678901234567890/10").numer().to_string(),
            "12345678901234567890123456789"
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "abc", "1e3", "1/", "/2", "1.2.3", "--1", "1_000", ".", "1/-2", "1/2/3", "-", "1/+2"] {
            assert!(
                matches!(bad.parse::<Amount>(), Err(AmountError::Malformed(_))),
                "expected {:?} to be malformed",
                bad
            );
        }
    }

    #[test]
    fn test_parse_zero_denominator() {
        assert_eq!("3/0".parse::<Amount>(), Err(AmountError::ZeroDenominator));
        assert_eq!("-3/00".parse::<Amount>(), Err(AmountError::ZeroDenominator));
    }

    #[test]
    fn test_canonical_form() {
        let a = Amount::from_ratio(-6, -4).unwrap();
        assert_eq!(a.numer(), &BigInt::from(3));
        assert_eq!(a.denom(), &BigInt::from(2));
        assert_eq!(a.to_string(), "3/2");
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let third = Amount::from_ratio(1, 3).unwrap();
        let total = &third + &third + &third;
        assert_eq!(total, Amount::one());
        assert_eq!(&total - &third, Amount::from_ratio(2, 3).unwrap());
        assert_eq!(&third * Amount::from_integer(6), Amount::from_integer(2));
        assert_eq!(Amount::one() / &third, Amount::from_integer(3));
        assert_eq!(-third.clone(), Amount::from_ratio(-1, 3).unwrap());
    }

    #[test]
    fn test_halve_and_min() {
        let a = Amount::from_integer(5);
        let b = Amount::from_integer(3);
        assert_eq!(a.halve(), Amount::from_ratio(5, 2).unwrap());
        assert_eq!(a.min_ref(&b), &b);
        assert_eq!(b.min_ref(&a), &b);
    }

    #[test]
    fn test_sum() {
        let parts = vec![Amount::from_integer(1), Amount::from_ratio(1, 2).unwrap()];
        let by_ref: Amount = parts.iter().sum();
        let by_value: Amount = parts.into_iter().sum();
        assert_eq!(by_ref, Amount::from_ratio(3, 2).unwrap());
        assert_eq!(by_ref, by_value);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(
            Amount::from_f64(0.1, 10).unwrap(),
            Amount::from_ratio(1, 10).unwrap()
        );
        assert_eq!(Amount::from_f64(-2.25, 4).unwrap(), amt("-9/4"));
        assert_eq!(Amount::from_f64(1e21, 1).unwrap().to_string(), "1000000000000000000000");
        assert!(matches!(
            Amount::from_f64(0.333, 100),
            Err(AmountError::Precision { max_denominator: 100, .. })
        ));
        assert_eq!(Amount::from_f64(f64::NAN, 10), Err(AmountError::NotFinite));
        assert_eq!(Amount::from_f64(f64::INFINITY, 10), Err(AmountError::NotFinite));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Amount::zero().is_zero());
        assert!(amt("-1/2").is_negative());
        assert!(amt("1/2").is_positive());
        assert!(!amt("1/2").is_integer());
    }

    #[test]
    fn test_to_f64_for_display() {
        assert!((amt("200/3").to_f64() - 66.666_666).abs() < 1e-5);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Display output parses back to the same amount
        #[test]
        fn test_display_parses_back(n in -1_000_000i64..1_000_000, d in 1i64..10_000) {
            let a = Amount::from_ratio(n, d).unwrap();
            let parsed: Amount = a.to_string().parse().unwrap();
            prop_assert_eq!(a, parsed);
        }

        /// Property: Ordering agrees with cross-multiplication
        #[test]
        fn test_ordering_matches_cross_product(
            a in -10_000i64..10_000, b in 1i64..1_000,
            c in -10_000i64..10_000, d in 1i64..1_000,
        ) {
            let x = Amount::from_ratio(a, b).unwrap();
            let y = Amount::from_ratio(c, d).unwrap();
            prop_assert_eq!(x.cmp(&y), (a * d).cmp(&(c * b)));
        }
    }
}
