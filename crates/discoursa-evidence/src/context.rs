//! Render gathered evidence as prompt context

use discoursa_domain::Evidence;
use std::fmt::Write;

/// Render the first `limit` articles, one line each
///
/// `limit` is clamped to the number of articles held.
pub fn render_context(evidence: &Evidence, limit: usize) -> String {
    let mut out = String::new();
    for article in evidence.articles().iter().take(limit) {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", article);
    }
    out
}

/// Build a prompt that grounds `question` in the first `limit` articles
///
/// With a `stance`, the model is told to argue against it. With no articles
/// to render, the model is told to flag ungrounded claims instead.
///
/// # Examples
///
/// ```
/// use discoursa_domain::{Article, Evidence};
/// use discoursa_evidence::build_prompt;
///
/// let mut evidence = Evidence::new("carbon tax");
/// evidence.add_article(Article::new(0, "pricing", "Taxes emissions."));
///
/// let prompt = build_prompt(&evidence, "Is it fair?", Some("it is fair"), 5);
/// assert!(prompt.contains("counter-argument"));
/// assert!(prompt.ends_with("Is it fair?"));
/// ```
pub fn build_prompt(
    evidence: &Evidence,
    question: &str,
    stance: Option<&str>,
    limit: usize,
) -> String {
    let mut prompt = format!("Topic: {}\n\n", evidence.topic);

    if let Some(stance) = stance.map(str::trim).filter(|s| !s.is_empty()) {
        let _ = write!(
            prompt,
            "The user supports the stance '{}' on this topic. Respond with a cogent \
             counter-argument to that stance and cite articles by id when you rely on them.\n\n",
            stance
        );
    }

    let context = render_context(evidence, limit);
    if context.is_empty() {
        prompt.push_str(
            "No supporting articles were gathered. Flag uncertainty when making claims \
             that are not grounded.\n\nRespond to the following.\n",
        );
    } else {
        let _ = write!(
            prompt,
            "Evidence:\n{}\nUsing only the evidence above, respond to the following.\n",
            context
        );
    }

    prompt.push_str(question);
    prompt
}
