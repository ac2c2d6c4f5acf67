//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Evidence parsing or gathering error
    #[error(transparent)]
    Evidence(#[from] discoursa_evidence::EvidenceError),

    /// LLM exchange error
    #[error(transparent)]
    Llm(#[from] discoursa_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// API credential missing from the environment
    #[error("{0} is not set (export it or add it to .env)")]
    MissingApiKey(&'static str),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
