//! Checks on a model reply to a debate prompt

use discoursa_domain::Evidence;
use std::fmt;

/// Something worth telling the user about a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyFlag {
    /// No articles backed the prompt, so nothing in the reply is grounded
    Ungrounded,

    /// Every word of the user's stance shows up in the reply
    EchoesStance {
        /// The stance the reply was meant to argue against
        stance: String,
    },
}

impl fmt::Display for ReplyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyFlag::Ungrounded => write!(
                f,
                "No supporting articles were gathered; treat claims as ungrounded."
            ),
            ReplyFlag::EchoesStance { stance } => write!(
                f,
                "The reply may have drifted toward the stance '{}' instead of opposing it.",
                stance
            ),
        }
    }
}

/// Flags raised for one reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyReview {
    /// Flags in the order they were checked
    pub flags: Vec<ReplyFlag>,
}

impl ReplyReview {
    /// True when no flag was raised
    pub fn is_clean(&self) -> bool {
        self.flags.is_empty()
    }

    /// True when the reply had no evidence behind it
    pub fn is_ungrounded(&self) -> bool {
        self.flags.contains(&ReplyFlag::Ungrounded)
    }
}

/// Review `reply` against the evidence it was grounded in and the user's stance
///
/// # Examples
///
/// ```
/// use discoursa_domain::Evidence;
/// use discoursa_evidence::{review_reply, ReplyFlag};
///
/// let review = review_reply("Prices would rise.", &Evidence::new("carbon tax"), None);
/// assert_eq!(review.flags, vec![ReplyFlag::Ungrounded]);
/// ```
pub fn review_reply(reply: &str, evidence: &Evidence, stance: Option<&str>) -> ReplyReview {
    let mut flags = Vec::new();
    if evidence.is_empty() {
        flags.push(ReplyFlag::Ungrounded);
    }
    if let Some(stance) = stance {
        if echoes_stance(reply, stance) {
            flags.push(ReplyFlag::EchoesStance {
                stance: stance.trim().to_string(),
            });
        }
    }
    ReplyReview { flags }
}

/// Whether every word of `stance` appears in `reply`, ignoring case
///
/// A blank stance never echoes.
pub fn echoes_stance(reply: &str, stance: &str) -> bool {
    let reply = reply.to_lowercase();
    let stance = stance.to_lowercase();
    let mut words = stance.split_whitespace().peekable();
    words.peek().is_some() && words.all(|word| reply.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use discoursa_domain::Article;

    fn grounded() -> Evidence {
        let mut evidence = Evidence::new("carbon tax");
        evidence.add_article(Article::new(0, "pricing", "Taxes emissions."));
        evidence
    }

    #[test]
    fn test_grounded_reply_is_clean() {
        let review = review_reply("Revenue recycling matters.", &grounded(), None);
        assert!(review.is_clean());
        assert!(!review.is_ungrounded());
    }

    #[test]
    fn test_empty_evidence_is_ungrounded() {
        let review = review_reply("Anything.", &Evidence::new("t"), None);
        assert!(review.is_ungrounded());
        assert_eq!(
            review.flags[0].to_string(),
            "No supporting articles were gathered; treat claims as ungrounded."
        );
    }

    #[test]
    fn test_echoes_stance() {
        assert!(echoes_stance("A carbon tax is GOOD policy.", "carbon tax good"));
        assert!(!echoes_stance("A carbon tax hurts households.", "carbon tax good"));
        assert!(!echoes_stance("anything", "   "));
    }

    #[test]
    fn test_review_flags_drift_toward_stance() {
        let review = review_reply(
            "Honestly, the tax is good.",
            &grounded(),
            Some(" tax is good "),
        );
        assert_eq!(
            review.flags,
            vec![ReplyFlag::EchoesStance {
                stance: "tax is good".to_string()
            }]
        );
    }
}
