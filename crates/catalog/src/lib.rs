//! Restaurant catalog domain model for Mealdrop.
//!
//! This crate provides:
//! - The [`Restaurant`] record as delivered by the catalog feed
//! - The [`SearchFilters`] value type with pure, reducer-style editing helpers
//! - [`FilterSummary`] derivation for filter chips and badges
//!
//! Everything here is plain data: no I/O, no interior mutability. Editing
//! helpers return new values and never touch their inputs, so filter state
//! can be held by whatever store the embedding app uses.
//!
//! # Example
//!
//! ```
//! use mealdrop_catalog::SearchFilters;
//!
//! let filters = SearchFilters::default()
//!     .toggle_cuisine("Italian")
//!     .toggle_dietary("Vegetarian");
//!
//! assert!(filters.has_active_filters());
//! assert_eq!(filters.summary().active_count, 2);
//! ```

mod filters;
mod restaurant;
mod summary;

pub use filters::{FiltersUpdate, PriceRange, SearchFilters};
pub use restaurant::Restaurant;
pub use summary::FilterSummary;
