//! Relevance ranking for search results.

use std::cmp::Ordering;

use mealdrop_catalog::Restaurant;

use crate::query::normalize_query;

/// Ranking bucket for a restaurant name against a query.
///
/// Lower buckets rank first; the bucket dominates the rating-based
/// secondary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelevanceTier {
    /// Name equals the query, ignoring case
    Exact = 0,
    /// Name starts with the query
    Prefix = 1,
    /// Everything else
    Other = 2,
}

/// Buckets a name against an already-normalized query.
///
/// An empty query puts everything in [`RelevanceTier::Other`].
pub fn relevance_tier(name: &str, normalized_query: &str) -> RelevanceTier {
    if normalized_query.is_empty() {
        return RelevanceTier::Other;
    }

    let name = name.to_lowercase();
    if name == normalized_query {
        RelevanceTier::Exact
    } else if name.starts_with(normalized_query) {
        RelevanceTier::Prefix
    } else {
        RelevanceTier::Other
    }
}

/// Orders results by (tier ascending, rating descending).
///
/// `sort_by` is a stable sort: restaurants that tie on both keys keep their
/// relative input order, which is what makes the ranking reproducible run to
/// run. With an empty query every name lands in [`RelevanceTier::Other`], so
/// the order degenerates to rating descending with catalog order preserved
/// among equal ratings.
pub fn sort_by_relevance(restaurants: &mut [&Restaurant], query: &str) {
    let query = normalize_query(query);

    restaurants.sort_by(|a, b| {
        relevance_tier(&a.name, &query)
            .cmp(&relevance_tier(&b.name, &query))
            .then_with(|| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
    });
}
