//! Gather command implementation.

use crate::cli::GatherArgs;
use crate::config::Config;
use crate::error::Result;
use discoursa_evidence::{render_context, GatherReport};
use std::io::Write;

/// Execute the gather command.
pub fn execute_gather(
    args: GatherArgs,
    config: &Config,
    out: &mut impl Write,
) -> Result<GatherReport> {
    let (report, limit) = super::gather_with_config(&args.evidence, config)?;
    let evidence = &report.evidence;

    writeln!(out, "Topic: {} ({} articles)", evidence.topic, evidence.count())?;
    write!(out, "{}", render_context(evidence, limit))?;

    for failure in &report.failures {
        writeln!(out, "skipped {}: {}", failure.path.display(), failure.error)?;
    }

    Ok(report)
}
