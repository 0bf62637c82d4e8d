//! Catalog search for Mealdrop.
//!
//! This crate provides:
//! - Free-text query matching over restaurant records
//! - Structured filter matching (cuisine, dietary, price, delivery time, rating)
//! - A filter-then-rank pipeline with deterministic relevance ordering
//! - Empty-state advisory content for the search screen
//! - A JSON boundary and WASM bindings for the app bridge
//!
//! Everything is a pure function over caller-owned data: no internal state,
//! no I/O, nothing to configure. Inputs are never mutated, so the functions
//! are safe to call from any thread. Re-run the pipeline on every query or
//! filter edit; debouncing keystrokes is the caller's concern.
//!
//! # Example
//!
//! ```
//! use mealdrop_catalog::{Restaurant, SearchFilters};
//! use mealdrop_search::filter_restaurants;
//!
//! let catalog: Vec<Restaurant> = Vec::new(); // supplied by the catalog feed
//! let filters = SearchFilters::default().toggle_cuisine("Italian");
//! let ranked = filter_restaurants(&catalog, "pasta", &filters);
//! assert!(ranked.is_empty());
//! ```

mod delivery_time;
mod empty_state;
mod error;
mod filter;
mod json;
mod pipeline;
mod query;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use delivery_time::parse_delivery_time;
pub use empty_state::{
    empty_state_action, empty_state_content, search_suggestions, EmptyStateAction,
    EmptyStateActionKind, EmptyStateContent, EmptyStateIcon, MAX_SUGGESTIONS,
};
pub use error::{Result, SearchError};
pub use filter::matches_filters;
pub use json::search_restaurants_json;
pub use pipeline::{apply_multiple_filters, filter_restaurants, MultiFilterOptions};
pub use query::{matches_search_query, normalize_query};
pub use relevance::{relevance_tier, sort_by_relevance, RelevanceTier};
