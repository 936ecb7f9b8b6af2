//! Bankruptcy problems as cooperative games
//!
//! A coalition `S` can secure for itself whatever of the estate is left after
//! everybody outside it has been paid in full:
//! `v(S) = max(0, E - Σ_{i∉S} c_i)`. The game is monotonic and convex, so its
//! core is non-empty; every rule in this crate lands inside it.

use crate::error::GameError;
use garment_domain::{Allocation, Amount, ClaimSet};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::fmt;

/// Largest number of claimants a game may have
///
/// Coalitions are enumerated exhaustively, `2^n` of them.
pub const MAX_PLAYERS: usize = 16;

/// A set of claimants, encoded as a bitmask over claimant positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coalition(u32);

impl Coalition {
    /// The empty coalition
    pub fn empty() -> Self {
        Self(0)
    }

    /// All of the first `players` claimants
    pub fn full(players: usize) -> Self {
        if players >= u32::BITS as usize {
            Self(u32::MAX)
        } else {
            Self((1u32 << players) - 1)
        }
    }

    /// Build from raw bits
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Build from claimant positions
    pub fn from_members(members: &[usize]) -> Self {
        members.iter().fold(Self::empty(), |acc, &i| acc.with(i))
    }

    /// Raw bitmask
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Whether claimant `player` belongs to the coalition
    pub fn contains(&self, player: usize) -> bool {
        player < u32::BITS as usize && self.0 & (1 << player) != 0
    }

    /// The coalition with `player` added
    pub fn with(self, player: usize) -> Self {
        Self(self.0 | (1 << player))
    }

    /// Whether every member of `self` is in `other`
    pub fn is_subset_of(&self, other: Coalition) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the coalition has no members
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Member positions in ascending order
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        (0..u32::BITS as usize).filter(move |&i| self.contains(i))
    }
}

impl fmt::Display for Coalition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.members().map(|i| i.to_string()).collect();
        write!(f, "{{{}}}", members.join(","))
    }
}

/// Transferable-utility game derived from a claim set
///
/// Every coalition value is computed once, on a common denominator, when the
/// game is built.
///
/// # Examples
///
/// ```
/// use garment_domain::{Amount, ClaimSet};
/// use garment_engine::{BankruptcyGame, Coalition};
///
/// let claims = ClaimSet::from_integers(&[100, 200, 300], 200).unwrap();
/// let game = BankruptcyGame::from_claims(&claims).unwrap();
///
/// // {1, 2} keeps what claimant 0 cannot take: 200 - 100
/// assert_eq!(game.value(Coalition::from_members(&[1, 2])), Amount::from_integer(100));
/// assert!(game.is_convex());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankruptcyGame {
    players: usize,
    total: Amount,
    /// Least common denominator of the claims and the estate
    scale: BigInt,
    /// `v(S) * scale`, indexed by `S.bits()`
    worth: Vec<BigInt>,
}

impl BankruptcyGame {
    /// Build the game for `claims`
    pub fn from_claims(claims: &ClaimSet) -> Result<Self, GameError> {
        let players = claims.len();
        if players > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                players,
                max: MAX_PLAYERS,
            });
        }

        let scale = claims
            .claims()
            .iter()
            .map(|claim| &claim.amount)
            .chain(std::iter::once(claims.estate()))
            .fold(BigInt::one(), |scale, amount| {
                let extra = (amount.as_ratio() * BigRational::from_integer(scale.clone()))
                    .denom()
                    .clone();
                scale * extra
            });
        let units = |amount: &Amount| {
            (amount.as_ratio() * BigRational::from_integer(scale.clone())).to_integer()
        };

        // v(S) = max(0, Σ_{i∈S} c_i - (C - E))
        let shortfall = units(&(claims.total_claims() - claims.estate()));
        let claim_units: Vec<BigInt> = claims.claims().iter().map(|c| units(&c.amount)).collect();
        let size = 1usize << players;
        let mut inside: Vec<BigInt> = Vec::with_capacity(size);
        inside.push(BigInt::zero());
        for bits in 1..size {
            let lowest = bits.trailing_zeros() as usize;
            let sum = &inside[bits & (bits - 1)] + &claim_units[lowest];
            inside.push(sum);
        }
        let worth = inside
            .into_iter()
            .map(|sum| {
                if sum > shortfall {
                    sum - &shortfall
                } else {
                    BigInt::zero()
                }
            })
            .collect();

        Ok(Self {
            players,
            total: claims.total_claims().clone(),
            scale,
            worth,
        })
    }

    /// Number of players
    pub fn players(&self) -> usize {
        self.players
    }

    /// The coalition of every player
    pub fn grand_coalition(&self) -> Coalition {
        Coalition::full(self.players())
    }

    /// Every coalition, the empty one first and the grand coalition last
    pub fn coalitions(&self) -> impl Iterator<Item = Coalition> {
        (0..=self.grand_coalition().bits()).map(Coalition::from_bits)
    }

    /// `v(S)`: what `coalition` is guaranteed once outsiders are paid in full
    ///
    /// Members past the last player are ignored.
    pub fn value(&self, coalition: Coalition) -> Amount {
        Amount::from(BigRational::new(
            self.worth_of(coalition.bits()).clone(),
            self.scale.clone(),
        ))
    }

    fn worth_of(&self, bits: u32) -> &BigInt {
        &self.worth[(bits & self.grand_coalition().bits()) as usize]
    }

    /// Whether adding a player never lowers a coalition's value
    pub fn is_monotonic(&self) -> bool {
        self.coalitions().all(|coalition| {
            let base = self.worth_of(coalition.bits());
            (0..self.players)
                .filter(|&i| !coalition.contains(i))
                .all(|i| self.worth_of(coalition.with(i).bits()) >= base)
        })
    }

    /// Whether marginal contributions grow with the coalition (supermodularity)
    ///
    /// Checked in its local form: for every `S` and players `i != j` outside it,
    /// `v(S+i+j) - v(S+j) >= v(S+i) - v(S)`.
    pub fn is_convex(&self) -> bool {
        let grand = self.grand_coalition().bits();
        (0..self.players).all(|i| {
            let player = 1u32 << i;
            // Marginal contribution of `i` to every coalition without it
            let marginal: Vec<Option<BigInt>> = (0..=grand)
                .map(|bits| {
                    (bits & player == 0)
                        .then(|| self.worth_of(bits | player) - self.worth_of(bits))
                })
                .collect();
            (0..=grand).filter(|bits| bits & player == 0).all(|bits| {
                (0..self.players)
                    .map(|j| 1u32 << j)
                    .filter(|&other| other != player && bits & other == 0)
                    .all(|other| {
                        marginal[(bits | other) as usize] >= marginal[bits as usize]
                    })
            })
        })
    }

    /// `e(S, x) = v(S) - Σ_{i∈S} x_i`
    ///
    /// Positions past the end of `allocation` count as zero awards.
    pub fn excess(&self, coalition: Coalition, allocation: &Allocation) -> Amount {
        let awarded: Amount = coalition
            .members()
            .filter_map(|i| allocation.awards().get(i))
            .sum();
        self.value(coalition) - awarded
    }

    /// Largest excess over all non-empty coalitions
    ///
    /// Non-positive exactly when no coalition is short-changed.
    pub fn max_excess(&self, allocation: &Allocation) -> Amount {
        let zero = Amount::zero();
        let award = |i: usize| allocation.awards().get(i).unwrap_or(&zero);

        let size = self.worth.len();
        let mut awarded: Vec<Amount> = Vec::with_capacity(size);
        awarded.push(Amount::zero());
        for bits in 1..size {
            let lowest = bits.trailing_zeros() as usize;
            let sum = &awarded[bits & (bits - 1)] + award(lowest);
            awarded.push(sum);
        }

        awarded
            .iter()
            .enumerate()
            .skip(1)
            .map(|(bits, given)| self.value(Coalition::from_bits(bits as u32)) - given)
            .max()
            .unwrap_or(zero)
    }

    /// Whether `allocation` is efficient and no coalition can do better alone
    pub fn in_core(&self, allocation: &Allocation) -> bool {
        allocation.len() == self.players()
            && allocation.total() == self.value(self.grand_coalition())
            && !self.max_excess(allocation).is_positive()
    }

    /// Total claimed by all players
    pub fn total_claims(&self) -> &Amount {
        &self.total
    }
}
