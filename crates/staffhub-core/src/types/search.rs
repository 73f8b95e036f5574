//! Free-text search term handling.

use serde::{Deserialize, Serialize};

/// A caller-supplied free-text search term.
///
/// An absent or blank term admits all entities; a present term is matched
/// case-insensitively against the entity's declared search columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    term: Option<String>,
}

impl SearchQuery {
    /// Create a search query, treating blank/whitespace input as absent.
    pub fn new(term: Option<String>) -> Self {
        let term = term
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self { term }
    }

    /// The trimmed search term, if one was supplied.
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Build an `ILIKE` pattern for the term, or `None` when absent.
    ///
    /// `\`, `%`, and `_` in the term are escaped so they match literally.
    pub fn like_pattern(&self) -> Option<String> {
        self.term.as_deref().map(|term| {
            let mut escaped = String::with_capacity(term.len() + 2);
            escaped.push('%');
            for c in term.chars() {
                if matches!(c, '\\' | '%' | '_') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped.push('%');
            escaped
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_term_admits_all() {
        assert!(SearchQuery::new(None).like_pattern().is_none());
        assert!(
            SearchQuery::new(Some("   ".to_string()))
                .like_pattern()
                .is_none()
        );
        assert!(
            SearchQuery::new(Some(String::new()))
                .like_pattern()
                .is_none()
        );
    }

    #[test]
    fn test_term_is_trimmed_and_wrapped() {
        let query = SearchQuery::new(Some("  acme  ".to_string()));
        assert_eq!(query.term(), Some("acme"));
        assert_eq!(query.like_pattern().as_deref(), Some("%acme%"));
    }

    #[test]
    fn test_wildcards_are_escaped() {
        let query = SearchQuery::new(Some("50%_off\\now".to_string()));
        assert_eq!(
            query.like_pattern().as_deref(),
            Some("%50\\%\\_off\\\\now%")
        );
    }
}
