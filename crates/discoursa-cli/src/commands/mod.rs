//! Command implementations.

pub mod ask;
pub mod debate;
pub mod gather;

pub use ask::execute_ask;
pub use debate::{execute_debate, DebateOutcome};
pub use gather::execute_gather;

use crate::cli::{EvidenceArgs, ModelArgs};
use crate::config::{Config, API_KEY_VAR};
use crate::error::{CliError, Result};
use discoursa_evidence::{gather_evidence, GatherPolicy, GatherReport};
use discoursa_llm::{ApiKey, ConfiguredProvider, ModelParams, OpenAiClient};
use tracing::debug;

/// Build a provider from config, CLI overrides and the environment credential.
pub fn connect(config: &Config, overrides: &ModelArgs) -> Result<ConfiguredProvider> {
    let params = model_params(config, overrides)?;
    let api_key = ApiKey::from_env(API_KEY_VAR).map_err(|_| CliError::MissingApiKey(API_KEY_VAR))?;

    let mut llm = config.llm.clone();
    if let Some(base_url) = &overrides.base_url {
        llm.base_url = base_url.clone();
    }
    let client = OpenAiClient::new(&llm)?;
    debug!(base_url = client.base_url(), model = params.model(), "Connecting");
    Ok(ConfiguredProvider::new(client, api_key, params))
}

/// Resolve model parameters, letting CLI flags override the config file.
pub fn model_params(config: &Config, overrides: &ModelArgs) -> Result<ModelParams> {
    let model = overrides
        .model
        .clone()
        .unwrap_or_else(|| config.llm.model.clone());
    let temperature = overrides.temperature.unwrap_or(config.llm.temperature);
    Ok(ModelParams::new(model, temperature)?)
}

/// Run a gathering pass with the policy and limit resolved from args and config.
fn gather_with_config(args: &EvidenceArgs, config: &Config) -> Result<(GatherReport, usize)> {
    let policy = if args.best_effort {
        GatherPolicy::BestEffort
    } else {
        config.evidence.policy
    };
    let limit = args.limit.unwrap_or(config.evidence.context_limit);
    if limit == 0 {
        return Err(CliError::InvalidInput("--limit must be greater than 0".into()));
    }

    let report = gather_evidence(&args.paths, &args.topic, policy)?;
    Ok((report, limit))
}
