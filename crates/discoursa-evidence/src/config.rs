//! Configuration for evidence gathering

use crate::error::EvidenceError;
use serde::{Deserialize, Serialize};

/// What to do when one path in a gathering pass fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatherPolicy {
    /// Abort the whole pass on the first failing path
    #[default]
    FailFast,
    /// Skip failing paths and report them alongside the evidence
    BestEffort,
}

/// Configuration for evidence gathering and context rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceConfig {
    /// Partial-failure policy for gathering passes
    #[serde(default)]
    pub policy: GatherPolicy,

    /// Maximum number of articles rendered into a prompt context
    #[serde(default = "default_context_limit")]
    pub context_limit: usize,
}

fn default_context_limit() -> usize {
    10
}

impl EvidenceConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EvidenceError> {
        if self.context_limit == 0 {
            return Err(EvidenceError::Config(
                "context_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EvidenceError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| EvidenceError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, EvidenceError> {
        toml::to_string_pretty(self)
            .map_err(|e| EvidenceError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            policy: GatherPolicy::FailFast,
            context_limit: default_context_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EvidenceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.policy, GatherPolicy::FailFast);
    }

    #[test]
    fn test_zero_context_limit_is_invalid() {
        let config = EvidenceConfig {
            context_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_policy_from_toml() {
        let config = EvidenceConfig::from_toml(r#"policy = "best_effort""#).unwrap();
        assert_eq!(config.policy, GatherPolicy::BestEffort);
        assert_eq!(config.context_limit, 10);
    }

    #[test]
    fn test_policy_names_are_snake_case() {
        let config = EvidenceConfig::from_toml(r#"policy = "fail_fast""#).unwrap();
        assert_eq!(config.policy, GatherPolicy::FailFast);

        let toml = EvidenceConfig {
            policy: GatherPolicy::BestEffort,
            context_limit: 3,
        }
        .to_toml()
        .unwrap();
        assert!(toml.contains(r#"policy = "best_effort""#));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(EvidenceConfig::from_toml(r#"policy = "sometimes""#).is_err());
        assert!(EvidenceConfig::from_toml(r#"policy = "besteffort""#).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EvidenceConfig {
            policy: GatherPolicy::BestEffort,
            context_limit: 4,
        };
        let parsed = EvidenceConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.policy, config.policy);
        assert_eq!(parsed.context_limit, config.context_limit);
    }
}
