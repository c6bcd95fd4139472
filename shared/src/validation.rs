//! Input validation and normalization helpers
//!
//! Request bodies are validated through the `validator` derive on the types
//! in [`crate::types`]; this module covers the free-form path parameters of
//! the lookup endpoints.

/// Parse a category id taken from a URL segment
///
/// Returns `None` for anything that is not an integer, which the lookup
/// treats as "matches nothing".
pub fn parse_lookup_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Build the `LIKE` pattern for a substring lookup
///
/// `%` and `_` inside the term keep their SQL wildcard meaning.
pub fn substring_pattern(term: &str) -> String {
    format!("%{}%", term)
}
