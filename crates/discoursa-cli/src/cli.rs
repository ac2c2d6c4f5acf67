//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Discoursa CLI - Gather article evidence and consult a chat model.
#[derive(Debug, Parser)]
#[command(name = "discoursa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "DISCOURSA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse article files and print the gathered evidence
    Gather(GatherArgs),

    /// Send a single prompt to the chat model
    Ask(AskArgs),

    /// Ground a question in gathered evidence and ask the chat model
    Debate(DebateArgs),
}

/// Evidence source arguments shared by several commands.
#[derive(Debug, Clone, Args)]
pub struct EvidenceArgs {
    /// Topic label for the gathered evidence
    #[arg(short, long)]
    pub topic: String,

    /// Skip unreadable or malformed files instead of aborting
    #[arg(long)]
    pub best_effort: bool,

    /// Maximum number of articles to include
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Article record files, in order
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Model overrides shared by commands that call the chat model.
#[derive(Debug, Clone, Default, Args)]
pub struct ModelArgs {
    /// Chat model identifier (overrides config)
    #[arg(short, long, env = "DISCOURSA_MODEL")]
    pub model: Option<String>,

    /// Sampling temperature, 0.0 to 2.0 (overrides config)
    #[arg(short = 'T', long)]
    pub temperature: Option<f64>,

    /// API base URL of an OpenAI-compatible endpoint (overrides config)
    #[arg(long, env = "DISCOURSA_BASE_URL")]
    pub base_url: Option<String>,
}

/// Arguments for the gather command.
#[derive(Debug, Clone, Args)]
pub struct GatherArgs {
    #[command(flatten)]
    pub evidence: EvidenceArgs,
}

/// Arguments for the ask command.
#[derive(Debug, Clone, Args)]
pub struct AskArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Prompt text
    pub prompt: String,
}

/// Arguments for the debate command.
#[derive(Debug, Clone, Args)]
pub struct DebateArgs {
    #[command(flatten)]
    pub evidence: EvidenceArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Question or claim to respond to
    #[arg(short, long)]
    pub question: String,

    /// Stance you hold on the topic; the model argues against it
    #[arg(short, long)]
    pub stance: Option<String>,
}
