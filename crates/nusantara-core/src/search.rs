//! Search query state owned by a single search field.

use serde::{Deserialize, Serialize};

/// Placeholder shown while the query is empty
pub const SEARCH_PLACEHOLDER: &str = "Search";

/// Editable text behind the search field
///
/// The only mutator is [`SearchQuery::set`], which replaces the whole value.
/// There is no validation and no length limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery {
    value: String,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the query with the field's new content
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the field should currently show [`SEARCH_PLACEHOLDER`]
    pub fn placeholder_visible(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_with_placeholder() {
        let query = SearchQuery::new();
        assert_eq!(query.value(), "");
        assert!(query.placeholder_visible());
    }

    #[test]
    fn test_typing_abc() {
        let mut query = SearchQuery::new();
        // A text field reports its full content after each keystroke
        for value in ["a", "ab", "abc"] {
            query.set(value);
        }
        assert_eq!(query.value(), "abc");
        assert!(!query.placeholder_visible());
    }

    #[test]
    fn test_clearing_restores_placeholder() {
        let mut query = SearchQuery::new();
        query.set("komodo");
        query.set(String::new());
        assert!(query.is_empty());
        assert!(query.placeholder_visible());
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let mut query = SearchQuery::new();
        query.set("bali");
        query.set("lom");
        assert_eq!(query.value(), "lom");
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        let mut query = SearchQuery::new();
        query.set("  ");
        assert_eq!(query.value(), "  ");
        assert!(!query.placeholder_visible());
    }
}
