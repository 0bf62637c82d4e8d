//! The search pipeline: match, then rank.

use mealdrop_catalog::{PriceRange, Restaurant, SearchFilters};
use tracing::debug;

use crate::filter::matches_filters;
use crate::query::matches_search_query;
use crate::relevance::sort_by_relevance;

/// Filters `catalog` by query and structured filters, then ranks the
/// survivors by relevance.
///
/// The result borrows from `catalog`: it is always a subset of the input by
/// identity, never a rewritten copy. An empty query with empty filters
/// returns the whole catalog, re-ranked. Runs in O(n log n) over the catalog
/// size.
pub fn filter_restaurants<'a>(
    catalog: &'a [Restaurant],
    query: &str,
    filters: &SearchFilters,
) -> Vec<&'a Restaurant> {
    // Both branches keep catalog order, which the ranker's stable sort
    // relies on for tie-breaking.
    #[cfg(feature = "parallel")]
    let mut results: Vec<&Restaurant> = {
        use rayon::prelude::*;
        catalog
            .par_iter()
            .filter(|restaurant| {
                matches_search_query(restaurant, query) && matches_filters(restaurant, filters)
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<&Restaurant> = catalog
        .iter()
        .filter(|restaurant| {
            matches_search_query(restaurant, query) && matches_filters(restaurant, filters)
        })
        .collect();

    sort_by_relevance(&mut results, query);

    debug!(
        catalog = catalog.len(),
        matched = results.len(),
        "catalog search complete"
    );

    results
}

/// Optional inputs for [`apply_multiple_filters`].
///
/// Unspecified fields leave that dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct MultiFilterOptions {
    pub query: Option<String>,
    pub cuisine_types: Option<Vec<String>>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub price_range: Option<PriceRange>,
    pub max_delivery_time: Option<u32>,
    pub min_rating: Option<f64>,
}

/// Convenience wrapper: assembles a [`SearchFilters`] from the provided
/// partial fields and delegates to [`filter_restaurants`].
pub fn apply_multiple_filters<'a>(
    catalog: &'a [Restaurant],
    options: &MultiFilterOptions,
) -> Vec<&'a Restaurant> {
    let filters = SearchFilters {
        cuisine_types: options.cuisine_types.clone().unwrap_or_default(),
        dietary_restrictions: options.dietary_restrictions.clone().unwrap_or_default(),
        price_range: options.price_range,
        max_delivery_time: options.max_delivery_time,
        min_rating: options.min_rating,
    };
    let query = options.query.as_deref().unwrap_or("");

    filter_restaurants(catalog, query, &filters)
}
