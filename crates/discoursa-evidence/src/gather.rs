//! Gather a set of record files into one Evidence collection

use crate::config::GatherPolicy;
use crate::error::EvidenceError;
use crate::parser::parse_article;
use discoursa_domain::Evidence;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A path skipped during a best-effort gathering pass
#[derive(Debug)]
pub struct GatherFailure {
    /// Path that failed to parse
    pub path: PathBuf,
    /// Why it failed
    pub error: EvidenceError,
}

/// Outcome of a gathering pass
#[derive(Debug)]
pub struct GatherReport {
    /// Articles that parsed, in input order
    pub evidence: Evidence,
    /// Paths that were skipped (always empty under [`GatherPolicy::FailFast`])
    pub failures: Vec<GatherFailure>,
}

impl GatherReport {
    /// True if every input path produced an article
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse every path in order and collect the articles under `topic`
///
/// Articles are appended in input order. Under [`GatherPolicy::FailFast`] the
/// first failing path aborts the pass with [`EvidenceError::Gather`]; under
/// [`GatherPolicy::BestEffort`] it is recorded in
/// [`GatherReport::failures`] and skipped.
pub fn gather_evidence<P: AsRef<Path>>(
    paths: &[P],
    topic: &str,
    policy: GatherPolicy,
) -> Result<GatherReport, EvidenceError> {
    let mut articles = Vec::with_capacity(paths.len());
    let mut failures = Vec::new();

    for path in paths {
        let path = path.as_ref();
        match parse_article(path) {
            Ok(article) => articles.push(article),
            Err(error) => match policy {
                GatherPolicy::FailFast => {
                    warn!(path = %path.display(), error = %error, "Aborting evidence gathering");
                    return Err(EvidenceError::Gather {
                        path: path.to_path_buf(),
                        source: Box::new(error),
                    });
                }
                GatherPolicy::BestEffort => {
                    warn!(path = %path.display(), error = %error, "Skipping article");
                    failures.push(GatherFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            },
        }
    }

    // Topic is only assigned once every path has been processed
    let mut evidence = Evidence::new(topic);
    for article in articles {
        debug!(index = article.index, summary = %article.summary, "Adding article");
        evidence.add_article(article);
    }

    info!(
        topic = %evidence.topic,
        articles = evidence.count(),
        skipped = failures.len(),
        "Gathered evidence"
    );

    Ok(GatherReport { evidence, failures })
}
