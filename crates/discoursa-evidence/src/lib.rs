//! Discoursa Evidence
//!
//! Loads article record files and assembles them into an [`Evidence`]
//! collection for one topic, turns it into a debate prompt, and reviews the
//! model's reply against it.
//!
//! # Architecture
//!
//! ```text
//! paths → parser → Article → gather → Evidence → context → prompt text
//! ```
//!
//! # Record Format
//!
//! One line per file: `index<summary<content`. The index is a base-10
//! non-negative integer; content runs to the end of the line. A `<` inside
//! content is rejected.
//!
//! # Example Usage
//!
//! ```no_run
//! use discoursa_evidence::{gather_evidence, render_context, GatherPolicy};
//!
//! # fn example() -> Result<(), discoursa_evidence::EvidenceError> {
//! let paths = ["articles/article0.txt", "articles/article1.txt"];
//! let report = gather_evidence(&paths, "carbon tax", GatherPolicy::FailFast)?;
//!
//! println!("{}", render_context(&report.evidence, 3));
//! # Ok(())
//! # }
//! ```
//!
//! [`Evidence`]: discoursa_domain::Evidence

#![warn(missing_docs)]

mod config;
mod context;
mod error;
mod gather;
mod parser;
mod reply;

#[cfg(test)]
mod tests;

pub use config::{EvidenceConfig, GatherPolicy};
pub use context::{build_prompt, render_context};
pub use error::EvidenceError;
pub use gather::{gather_evidence, GatherFailure, GatherReport};
pub use parser::{parse_article, parse_article_str, DELIMITER};
pub use reply::{echoes_stance, review_reply, ReplyFlag, ReplyReview};
