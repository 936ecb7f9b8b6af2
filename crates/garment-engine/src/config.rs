//! Engine configuration

use crate::error::ConfigError;
use garment_domain::Rule;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bound on denominators accepted from floating-point input
pub const DEFAULT_MAX_DENOMINATOR: u64 = 1_000_000;

/// What to do with a claim larger than the whole estate
///
/// Nobody can receive more than the estate, so by default such claims are
/// truncated to it before a rule runs. Callers who want the condition surfaced
/// can ask for a warning or an outright rejection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverEstatePolicy {
    /// Truncate silently
    #[default]
    Cap,

    /// Truncate and log a warning per claim
    Warn,

    /// Refuse to divide
    Reject,
}

impl OverEstatePolicy {
    /// Get the policy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OverEstatePolicy::Cap => "cap",
            OverEstatePolicy::Warn => "warn",
            OverEstatePolicy::Reject => "reject",
        }
    }

    /// Parse a policy from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cap" => Some(OverEstatePolicy::Cap),
            "warn" => Some(OverEstatePolicy::Warn),
            "reject" => Some(OverEstatePolicy::Reject),
            _ => None,
        }
    }
}

impl std::str::FromStr for OverEstatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid over-estate policy: {}", s))
    }
}

/// Configuration for the division engine
///
/// # Examples
///
/// ```
/// use garment_engine::{EngineConfig, OverEstatePolicy};
///
/// let config = EngineConfig::from_toml_str("over_estate = \"reject\"").unwrap();
/// assert_eq!(config.over_estate, OverEstatePolicy::Reject);
/// assert_eq!(config.max_denominator, 1_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Handling of claims above the estate
    pub over_estate: OverEstatePolicy,

    /// Rule used when the caller does not name one
    #[serde(with = "rule_name")]
    pub default_rule: Rule,

    /// Largest denominator accepted when converting floats
    pub max_denominator: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            over_estate: OverEstatePolicy::Cap,
            default_rule: Rule::Talmud,
            max_denominator: DEFAULT_MAX_DENOMINATOR,
        }
    }
}

impl EngineConfig {
    /// Configuration that refuses oversized claims
    pub fn strict() -> Self {
        Self {
            over_estate: OverEstatePolicy::Reject,
            ..Self::default()
        }
    }

    /// Configuration that truncates oversized claims but reports each one
    pub fn audited() -> Self {
        Self {
            over_estate: OverEstatePolicy::Warn,
            ..Self::default()
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_denominator == 0 {
            return Err(ConfigError::Invalid(
                "max_denominator must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Serialize [`Rule`] by its identifier
mod rule_name {
    use garment_domain::Rule;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(rule: &Rule, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(rule.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rule, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.over_estate, OverEstatePolicy::Cap);
        assert_eq!(config.default_rule, Rule::Talmud);
        assert_eq!(config.max_denominator, DEFAULT_MAX_DENOMINATOR);
    }

    #[test]
    fn test_presets() {
        assert_eq!(EngineConfig::strict().over_estate, OverEstatePolicy::Reject);
        assert_eq!(EngineConfig::audited().over_estate, OverEstatePolicy::Warn);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            over_estate = "warn"
            default_rule = "cel"
            max_denominator = 100
        "#;

        let config = EngineConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.over_estate, OverEstatePolicy::Warn);
        assert_eq!(config.default_rule, Rule::Cel);
        assert_eq!(config.max_denominator, 100);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        assert!(EngineConfig::from_toml_str("default_rule = \"garment\"").is_err());
        assert!(EngineConfig::from_toml_str("over_estate = \"ignore\"").is_err());
        assert!(matches!(
            EngineConfig::from_toml_str("max_denominator = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EngineConfig::strict();
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("over_estate = \"reject\""));
        assert!(rendered.contains("default_rule = \"talmud\""));
        assert_eq!(EngineConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let config = EngineConfig::audited();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "default_rule = \"proportional\"\n").unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.default_rule, Rule::Proportional);
        assert!(matches!(
            EngineConfig::from_file(dir.path().join("missing.toml")),
            Err(ConfigError::FileRead(_))
        ));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("WARN".parse::<OverEstatePolicy>(), Ok(OverEstatePolicy::Warn));
        assert!("ignore".parse::<OverEstatePolicy>().is_err());
        assert_eq!(OverEstatePolicy::Reject.as_str(), "reject");
    }
}
