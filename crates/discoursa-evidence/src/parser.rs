//! Parse article record files
//!
//! A record is a single line `index<summary<content`. Content runs to the end
//! of the first line. There is no escaping, so a `<` inside a field is
//! rejected rather than silently shifting the fields.

use crate::error::EvidenceError;
use discoursa_domain::Article;
use std::path::Path;
use tracing::debug;

/// Field separator used by record files
pub const DELIMITER: char = '<';

/// Parse one article from a record file
pub fn parse_article(path: impl AsRef<Path>) -> Result<Article, EvidenceError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| EvidenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        EvidenceError::format(format!("record is not valid UTF-8: {}", e.utf8_error()))
            .at_path(path)
    })?;

    let article = parse_article_str(&text).map_err(|e| e.at_path(path))?;
    debug!(path = %path.display(), index = article.index, "Parsed article");
    Ok(article)
}

/// Parse one article from record text
///
/// # Examples
///
/// ```
/// use discoursa_evidence::parse_article_str;
///
/// let article = parse_article_str("0<short summary<full body text").unwrap();
/// assert_eq!(article.index, 0);
/// assert_eq!(article.summary, "short summary");
/// assert_eq!(article.content, "full body text");
/// ```
pub fn parse_article_str(text: &str) -> Result<Article, EvidenceError> {
    let line = first_line(text);
    if line.trim().is_empty() {
        return Err(EvidenceError::format("empty record"));
    }

    let mut fields = line.splitn(3, DELIMITER);
    let index_field = fields.next().unwrap_or_default();
    let summary = fields
        .next()
        .ok_or_else(|| EvidenceError::format("missing summary delimiter"))?;
    let content = fields
        .next()
        .ok_or_else(|| EvidenceError::format("missing content delimiter"))?;

    if content.contains(DELIMITER) {
        return Err(EvidenceError::format(format!(
            "unescaped '{}' in content",
            DELIMITER
        )));
    }

    let index = index_field.trim().parse::<u64>().map_err(|e| {
        EvidenceError::format(format!("invalid index {:?}: {}", index_field, e))
    })?;

    Ok(Article::new(index, summary, content))
}

fn first_line(text: &str) -> &str {
    let line = text.lines().next().unwrap_or_default();
    line.strip_suffix('\r').unwrap_or(line)
}
