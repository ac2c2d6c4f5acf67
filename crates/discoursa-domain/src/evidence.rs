//! Evidence module - the ordered article collection for one topic

use crate::Article;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by positional lookups on an [`Evidence`] collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvidenceLookupError {
    /// No article at the requested position
    #[error("No article at position {position} (collection holds {len})")]
    NotFound {
        /// Requested position
        position: usize,
        /// Number of articles held at the time of the lookup
        len: usize,
    },
}

/// All articles gathered for one topic
///
/// Articles keep insertion order. There is no removal operation; after a
/// gathering pass the collection is only read or mutated through
/// [`Evidence::mark_used`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Topic label supplied by the caller
    pub topic: String,

    /// Optional numeric topic identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i64>,

    articles: Vec<Article>,
}

impl Evidence {
    /// Create an empty collection for a topic
    ///
    /// # Examples
    ///
    /// ```
    /// use discoursa_domain::{Article, Evidence};
    ///
    /// let mut evidence = Evidence::new("carbon tax");
    /// evidence.add_article(Article::new(0, "summary", "content"));
    /// assert_eq!(evidence.count(), 1);
    /// assert_eq!(evidence.get_article_content(0).unwrap(), "content");
    /// assert!(evidence.get_article(1).is_err());
    /// ```
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            topic_id: None,
            articles: Vec::new(),
        }
    }

    /// Attach a numeric topic identifier
    pub fn with_topic_id(mut self, topic_id: i64) -> Self {
        self.topic_id = Some(topic_id);
        self
    }

    /// Append an article at the end of the collection
    pub fn add_article(&mut self, article: Article) {
        self.articles.push(article);
    }

    /// Number of articles held
    pub fn count(&self) -> usize {
        self.articles.len()
    }

    /// True if no article has been added
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Read-only view of all articles in insertion order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Get a copy of the article at `position`
    ///
    /// The returned value is detached from the collection; mutating it does
    /// not affect the stored record.
    pub fn get_article(&self, position: usize) -> Result<Article, EvidenceLookupError> {
        self.articles
            .get(position)
            .cloned()
            .ok_or_else(|| self.not_found(position))
    }

    /// Get the content of the article at `position`
    pub fn get_article_content(&self, position: usize) -> Result<String, EvidenceLookupError> {
        self.articles
            .get(position)
            .map(|a| a.content.clone())
            .ok_or_else(|| self.not_found(position))
    }

    /// Mark the article at `position` as used
    ///
    /// Idempotent. Returns `false` and leaves the collection untouched when
    /// `position` is out of range.
    pub fn mark_used(&mut self, position: usize) -> bool {
        match self.articles.get_mut(position) {
            Some(article) => {
                article.used = true;
                true
            }
            None => false,
        }
    }

    /// Iterate over `(position, article)` pairs not yet marked used
    pub fn unused(&self) -> impl Iterator<Item = (usize, &Article)> {
        self.articles.iter().enumerate().filter(|(_, a)| !a.used)
    }

    /// Find the first article whose payload `index` field equals `index`
    ///
    /// Returns its position alongside the article.
    pub fn find_by_index(&self, index: u64) -> Option<(usize, &Article)> {
        self.articles
            .iter()
            .enumerate()
            .find(|(_, a)| a.index == index)
    }

    fn not_found(&self, position: usize) -> EvidenceLookupError {
        EvidenceLookupError::NotFound {
            position,
            len: self.articles.len(),
        }
    }
}
