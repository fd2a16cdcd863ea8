//! Links to the search page.

use serde::{Deserialize, Serialize};

/// Path of the search page.
pub const SEARCH_PATH: &str = "/search";

/// Name of the query parameter holding the term.
pub const TERM_PARAM: &str = "q";

/// A search page request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }

    /// `/search?q=<percent-encoded term>`.
    pub fn href(&self) -> String {
        format!("{}?{}={}", SEARCH_PATH, TERM_PARAM, urlencoding::encode(&self.q))
    }
}
