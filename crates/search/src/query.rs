//! Free-text query matching.

use mealdrop_catalog::Restaurant;

/// Normalizes a free-text query for matching: trims surrounding whitespace
/// and lowercases.
#[inline]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns true if `restaurant` satisfies the free-text `query`.
///
/// An empty-after-trim query matches unconditionally. Otherwise the
/// normalized query must appear as a substring of the name, the description,
/// or any cuisine tag, compared case-insensitively. Pure substring search;
/// no tokenization or fuzzy matching.
pub fn matches_search_query(restaurant: &Restaurant, query: &str) -> bool {
    let query = normalize_query(query);
    if query.is_empty() {
        return true;
    }

    restaurant.name.to_lowercase().contains(&query)
        || restaurant.description.to_lowercase().contains(&query)
        || restaurant
            .cuisine_types
            .iter()
            .any(|cuisine| cuisine.to_lowercase().contains(&query))
}
