//! Discoursa Domain Layer
//!
//! Core data model for evidence gathering. Parsing, file access and the LLM
//! exchange live in other crates; this crate only defines the records and the
//! collection that owns them.
//!
//! ## Key Concepts
//!
//! - **Article**: one parsed evidence record with a `used` flag
//! - **Evidence**: the ordered set of articles gathered for one topic
//!
//! ## Addressing
//!
//! Every `Evidence` accessor that takes a `position` addresses the collection
//! by insertion order. The `Article::index` field is payload data: it may be
//! sparse, duplicated or unordered, and is only consulted by
//! [`Evidence::find_by_index`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod evidence;

// Re-exports for convenience
pub use article::Article;
pub use evidence::{Evidence, EvidenceLookupError};
