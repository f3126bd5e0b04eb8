//! Analyzer configuration.
//!
//! Run-level knobs with defaults, optionally overridden from environment
//! variables. Revenue and bonus policies are not configured here; they are
//! injected through [`AnalysisOptions`](crate::analyzer::AnalysisOptions).

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default length of each seller's top-products list.
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// What to do when a purchase record points at an unknown seller or SKU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    /// Abort the run with an error naming the unresolved identifier.
    #[default]
    Fail,
    /// Drop the offending record or item, log a warning and carry on.
    Skip,
}

impl fmt::Display for ReferencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferencePolicy::Fail => f.write_str("fail"),
            ReferencePolicy::Skip => f.write_str("skip"),
        }
    }
}

impl FromStr for ReferencePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(ReferencePolicy::Fail),
            "skip" => Ok(ReferencePolicy::Skip),
            _ => Err(ConfigError::InvalidValue(ENV_REFERENCE_POLICY.to_string())),
        }
    }
}

const ENV_TOP_PRODUCTS_LIMIT: &str = "SALES_TOP_PRODUCTS_LIMIT";
const ENV_REFERENCE_POLICY: &str = "SALES_REFERENCE_POLICY";

/// Analyzer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// How many SKUs each report entry lists (default: 10)
    pub top_products_limit: usize,

    /// Handling of unresolved seller/SKU references (default: fail)
    pub reference_policy: ReferencePolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
            reference_policy: ReferencePolicy::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = AnalyzerConfig {
            top_products_limit: lookup(ENV_TOP_PRODUCTS_LIMIT)
                .unwrap_or_else(|| DEFAULT_TOP_PRODUCTS_LIMIT.to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_TOP_PRODUCTS_LIMIT.to_string()))?,

            reference_policy: match lookup(ENV_REFERENCE_POLICY) {
                Some(raw) => raw.parse()?,
                None => ReferencePolicy::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the analyzer cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_products_limit == 0 {
            return Err(ConfigError::InvalidValue(ENV_TOP_PRODUCTS_LIMIT.to_string()));
        }
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.top_products_limit, 10);
        assert_eq!(config.reference_policy, ReferencePolicy::Fail);
    }

    #[test]
    fn test_overrides() {
        let config = AnalyzerConfig::from_lookup(lookup_from(&[
            ("SALES_TOP_PRODUCTS_LIMIT", " 3 "),
            ("SALES_REFERENCE_POLICY", "Skip"),
        ]))
        .unwrap();
        assert_eq!(config.top_products_limit, 3);
        assert_eq!(config.reference_policy, ReferencePolicy::Skip);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let err = AnalyzerConfig::from_lookup(lookup_from(&[("SALES_TOP_PRODUCTS_LIMIT", "ten")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SALES_TOP_PRODUCTS_LIMIT");

        assert!(
            AnalyzerConfig::from_lookup(lookup_from(&[("SALES_TOP_PRODUCTS_LIMIT", "0")])).is_err()
        );
        assert!(
            AnalyzerConfig::from_lookup(lookup_from(&[("SALES_REFERENCE_POLICY", "ignore")]))
                .is_err()
        );
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [ReferencePolicy::Fail, ReferencePolicy::Skip] {
            assert_eq!(policy.to_string().parse::<ReferencePolicy>().unwrap(), policy);
        }
    }
}
