//! JSON boundary for the app bridge.
//!
//! The mobile app hands the catalog and filter state across the bridge as
//! JSON strings; this module is the string-in/string-out face of the
//! pipeline. The WASM bindings are thin wrappers over it.

use mealdrop_catalog::{Restaurant, SearchFilters};

use crate::error::{Result, SearchError};
use crate::pipeline::filter_restaurants;

/// Runs the search pipeline over JSON payloads.
///
/// `catalog_json` must be an array of restaurant records and `filters_json`
/// an object in the filter-state shape; fields missing from the filter
/// object default to "no constraint", so `"{}"` means unfiltered. Returns
/// the ranked matches re-encoded as a JSON array.
pub fn search_restaurants_json(
    catalog_json: &str,
    query: &str,
    filters_json: &str,
) -> Result<String> {
    let catalog: Vec<Restaurant> =
        serde_json::from_str(catalog_json).map_err(SearchError::InvalidCatalog)?;
    let filters: SearchFilters =
        serde_json::from_str(filters_json).map_err(SearchError::InvalidFilters)?;

    let results = filter_restaurants(&catalog, query, &filters);

    serde_json::to_string(&results).map_err(SearchError::Encode)
}
