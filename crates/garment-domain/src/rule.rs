//! Rule module - the closed set of division rules

use std::fmt;

/// Division rule identifier
///
/// The set is fixed by the domain; adding a rule is a deliberate change, not an
/// extension point.
/// - Proportional: awards proportional to claims
/// - Cea: constrained equal awards
/// - Cel: constrained equal losses
/// - Talmud: the n-claimant contested-garment rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `x_i = E · c_i / C`
    Proportional,

    /// Equal awards, nobody above their claim
    Cea,

    /// Equal losses, nobody below zero
    Cel,

    /// CEA over half-claims, or its dual once the estate passes half the claims
    Talmud,
}

impl Rule {
    /// All rules, in presentation order
    pub const ALL: [Rule; 4] = [Rule::Proportional, Rule::Cea, Rule::Cel, Rule::Talmud];

    /// Get the rule identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Proportional => "proportional",
            Rule::Cea => "cea",
            Rule::Cel => "cel",
            Rule::Talmud => "talmud",
        }
    }

    /// Human-readable name
    pub fn title(&self) -> &'static str {
        match self {
            Rule::Proportional => "Proportional",
            Rule::Cea => "Constrained Equal Awards",
            Rule::Cel => "Constrained Equal Losses",
            Rule::Talmud => "Talmud",
        }
    }

    /// Parse a rule identifier (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "proportional" => Some(Rule::Proportional),
            "cea" => Some(Rule::Cea),
            "cel" => Some(Rule::Cel),
            "talmud" => Some(Rule::Talmud),
            _ => None,
        }
    }

    /// The dual rule: `dual(R)(c, E) = c - R(c, C - E)`
    pub fn dual(&self) -> Self {
        match self {
            Rule::Cea => Rule::Cel,
            Rule::Cel => Rule::Cea,
            Rule::Proportional => Rule::Proportional,
            Rule::Talmud => Rule::Talmud,
        }
    }

    /// Whether the rule is its own dual
    pub fn is_self_dual(&self) -> bool {
        self.dual() == *self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid rule: {} (expected proportional, cea, cel or talmud)",
                s
            )
        })
    }
}
