//! Reading division problems from flags or JSON files.

use crate::cli::ProblemArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use garment_domain::{Amount, ClaimSet};
use garment_engine::Engine;
use serde::Deserialize;
use std::fs;

/// Problem definition for JSON input.
///
/// ```json
/// { "estate": "100", "claims": ["100", 50, 12.5] }
/// ```
#[derive(Debug, Deserialize)]
pub struct ProblemFile {
    /// Estate to divide
    pub estate: AmountValue,

    /// Claims, in claimant order
    pub claims: Vec<AmountValue>,
}

/// An amount as it may appear in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    /// Whole number
    Integer(i64),
    /// Float, converted with the configured denominator bound
    Float(f64),
    /// Exact text: "42", "200/3", "12.375"
    Text(String),
}

impl AmountValue {
    /// Convert to an exact amount.
    pub fn to_amount(&self, engine: &Engine) -> Result<Amount> {
        match self {
            AmountValue::Integer(value) => Ok(Amount::from_integer(*value)),
            AmountValue::Float(value) => Ok(engine.amount_from_f64(*value)?),
            AmountValue::Text(text) => Ok(text.trim().parse()?),
        }
    }
}

/// Engine built from the config, with the command's policy override applied.
pub fn engine_for(args: &ProblemArgs, config: &Config) -> Engine {
    let mut engine_config = config.engine.clone();
    if let Some(policy) = args.policy {
        engine_config.over_estate = policy.into();
    }
    Engine::new(engine_config)
}

/// Build the claim set described by `args`.
pub fn load_problem(args: &ProblemArgs, engine: &Engine) -> Result<ClaimSet> {
    if let Some(path) = &args.claims_file {
        let contents = fs::read_to_string(path)?;
        return parse_problem_file(&contents, engine);
    }

    let estate = args.estate.as_deref().ok_or_else(|| {
        CliError::InvalidInput("Must specify either --estate and --claims or --claims-file".into())
    })?;
    if args.claims.is_empty() {
        return Err(CliError::InvalidInput("No claims provided".to_string()));
    }
    Ok(engine.parse_claims(args.claims.as_slice(), estate)?)
}

/// Parse a JSON problem definition.
pub fn parse_problem_file(contents: &str, engine: &Engine) -> Result<ClaimSet> {
    let problem: ProblemFile = serde_json::from_str(contents)?;
    let claims = problem
        .claims
        .iter()
        .map(|claim| claim.to_amount(engine))
        .collect::<Result<Vec<_>>>()?;
    let estate = problem.estate.to_amount(engine)?;
    Ok(ClaimSet::new(claims, estate)?)
}
