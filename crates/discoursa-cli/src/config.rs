//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use discoursa_evidence::EvidenceConfig;
use discoursa_llm::LlmConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "DISCOURSA_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chat-completions client settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Evidence gathering settings
    #[serde(default)]
    pub evidence: EvidenceConfig,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".discoursa").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::path()?;
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.llm.validate()?;
        self.evidence.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discoursa_evidence::GatherPolicy;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.llm.model, "gpt-5-nano");
        assert_eq!(config.evidence.policy, GatherPolicy::FailFast);
    }

    #[test]
    fn test_parse_sections() {
        let config = Config::from_toml(
            r#"
            [llm]
            model = "gpt-4o-mini"
            temperature = 0.4
            timeout_secs = 30

            [evidence]
            policy = "best_effort"
            context_limit = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.evidence.policy, GatherPolicy::BestEffort);
        assert_eq!(config.evidence.context_limit, 3);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.llm.model, "gpt-5-nano");
        assert_eq!(config.evidence.context_limit, 10);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_toml("[llm]\ntemperature = 9.0").is_err());
        assert!(Config::from_toml("[evidence]\ncontext_limit = 0").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[llm]\nmodel = \"local-model\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.llm.model, "local-model");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
