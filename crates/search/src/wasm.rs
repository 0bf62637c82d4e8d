//! WASM bindings for catalog search.

use wasm_bindgen::prelude::*;

/// Run the full search pipeline over JSON payloads.
///
/// # Arguments
/// * `catalog_json` - JSON array of restaurant records
/// * `query` - Free-text query
/// * `filters_json` - Filter-state object; `"{}"` means unfiltered
///
/// # Returns
/// The ranked matches as a JSON array, or `"[]"` if either payload is
/// malformed.
#[wasm_bindgen]
pub fn search_restaurants(catalog_json: &str, query: &str, filters_json: &str) -> String {
    crate::search_restaurants_json(catalog_json, query, filters_json)
        .unwrap_or_else(|_| "[]".to_string())
}

/// Extract the worst-case delivery estimate in minutes, if the text parses.
#[wasm_bindgen]
pub fn delivery_minutes(text: &str) -> Option<u32> {
    crate::parse_delivery_time(text)
}

/// Check a single restaurant record against a free-text query.
///
/// Returns false if `restaurant_json` is malformed.
#[wasm_bindgen]
pub fn query_matches(restaurant_json: &str, query: &str) -> bool {
    match serde_json::from_str::<mealdrop_catalog::Restaurant>(restaurant_json) {
        Ok(restaurant) => crate::matches_search_query(&restaurant, query),
        Err(_) => false,
    }
}
