//! Ask command implementation.

use crate::cli::AskArgs;
use crate::error::{CliError, Result};
use discoursa_llm::ChatProvider;
use std::io::Write;

/// Execute the ask command.
pub async fn execute_ask(
    args: AskArgs,
    provider: &dyn ChatProvider,
    out: &mut impl Write,
) -> Result<String> {
    if args.prompt.trim().is_empty() {
        return Err(CliError::InvalidInput("prompt must not be empty".into()));
    }

    let reply = provider.complete(&args.prompt).await?;
    writeln!(out, "{}", reply)?;
    Ok(reply)
}
