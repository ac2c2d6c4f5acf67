//! Debate command implementation.

use crate::cli::DebateArgs;
use crate::config::Config;
use crate::error::Result;
use discoursa_domain::Evidence;
use discoursa_evidence::{build_prompt, review_reply, ReplyReview};
use discoursa_llm::ChatProvider;
use std::io::Write;
use tracing::{info, warn};

/// Everything a debate exchange produced.
#[derive(Debug, Clone)]
pub struct DebateOutcome {
    /// Gathered evidence, with the articles placed in the prompt marked used
    pub evidence: Evidence,
    /// Positions of the articles placed in the prompt
    pub used: Vec<usize>,
    /// The model's reply
    pub reply: String,
    /// Flags raised about the reply
    pub review: ReplyReview,
}

/// Execute the debate command.
///
/// The reply is printed followed by one `Note:` line per review flag. The
/// positions of the articles sent to the model are logged at `info`; the
/// marked [`Evidence`] itself is only available through the returned outcome.
pub async fn execute_debate(
    args: DebateArgs,
    config: &Config,
    provider: &dyn ChatProvider,
    out: &mut impl Write,
) -> Result<DebateOutcome> {
    let (report, limit) = super::gather_with_config(&args.evidence, config)?;
    let mut evidence = report.evidence;
    let stance = args.stance.as_deref();
    if evidence.is_empty() {
        warn!(topic = %evidence.topic, "No evidence gathered; the reply will be ungrounded");
    }

    let prompt = build_prompt(&evidence, &args.question, stance, limit);
    let reply = provider.complete(&prompt).await?;

    let used: Vec<usize> = (0..limit.min(evidence.count()))
        .filter(|&position| evidence.mark_used(position))
        .collect();
    info!(topic = %evidence.topic, used = ?used, "Debate reply received");

    let review = review_reply(&reply, &evidence, stance);
    writeln!(out, "{}", reply)?;
    for flag in &review.flags {
        warn!(%flag, "Reply flagged");
        writeln!(out, "Note: {}", flag)?;
    }

    Ok(DebateOutcome {
        evidence,
        used,
        reply,
        review,
    })
}
