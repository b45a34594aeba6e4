//! Listing caps and name-search helpers.
//!
//! Shared by the in-memory gateway (which filters in Rust) and the
//! PostgreSQL gateway (which builds `ILIKE` patterns), so both backends agree
//! on what a search term matches.

// ---------------------------------------------------------------------------
// Listing caps
// ---------------------------------------------------------------------------

/// Maximum number of spots returned by a listing or scanned by a nearby query.
pub const SPOT_SCAN_CAP: usize = 1000;

/// Maximum number of species records returned by a listing or search.
pub const SPECIES_LIST_CAP: usize = 100;

/// Maximum number of status checks returned by a listing.
pub const STATUS_LIST_CAP: usize = 1000;

// ---------------------------------------------------------------------------
// Search helpers
// ---------------------------------------------------------------------------

/// Treat a missing or empty search term as "no search".
pub fn normalize_search(search: Option<&str>) -> Option<&str> {
    search.filter(|s| !s.is_empty())
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Escape `\`, `%` and `_` so a user term matches literally inside a
/// PostgreSQL `LIKE`/`ILIKE` pattern (default escape character `\`).
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%term%` substring pattern with the term escaped.
pub fn substring_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
