//! Search result record.

use serde::{Deserialize, Serialize};

/// A single ranked search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Position across the whole run, starting at 1.
    pub rank: u32,
    /// Result URL.
    pub url: String,
    /// Result title.
    pub title: String,
    /// Result description/snippet.
    pub description: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        rank: u32,
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            rank,
            url: url.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_new() {
        let result = SearchResult::new(1, "https://example.com", "Title", "Snippet");
        assert_eq!(result.rank, 1);
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.title, "Title");
        assert_eq!(result.description, "Snippet");
    }

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult::new(3, "https://example.com", "Title", "Snippet");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"rank\":3"));
        assert!(json.contains("\"url\":\"https://example.com\""));
        assert!(json.contains("\"description\":\"Snippet\""));
    }
}
