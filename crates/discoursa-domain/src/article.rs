//! Article module - one evidence record

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single evidence record parsed from one source file
///
/// Articles are immutable once parsed except for the `used` flag, which is
/// only flipped through [`crate::Evidence::mark_used`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Identifier carried in the record itself (not its position)
    pub index: u64,

    /// Short summary text
    pub summary: String,

    /// Body text
    pub content: String,

    /// Whether this article has already been used
    #[serde(default)]
    pub used: bool,
}

impl Article {
    /// Create a new, unused article
    ///
    /// # Examples
    ///
    /// ```
    /// use discoursa_domain::Article;
    ///
    /// let article = Article::new(0, "short summary", "full body text");
    /// assert_eq!(article.index, 0);
    /// assert!(!article.used);
    /// ```
    pub fn new(index: u64, summary: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            index,
            summary: summary.into(),
            content: content.into(),
            used: false,
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {} summary: {} content: {}",
            self.index, self.summary, self.content
        )
    }
}
