//! Human-readable summaries of the active filter state.

use serde::{Deserialize, Serialize};

use crate::SearchFilters;

/// Derived description of the active filter dimensions, used for the filter
/// badge and chip row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSummary {
    /// Number of active dimensions; each dimension counts once regardless of
    /// how many tags it holds.
    pub active_count: usize,
    /// One fragment per active dimension, in cuisine, dietary, price, rating
    /// order.
    pub fragments: Vec<String>,
}

impl SearchFilters {
    /// Summarizes the active dimensions.
    ///
    /// The delivery-time ceiling is not rendered as a chip, so it is not
    /// counted here; it still participates in [`SearchFilters::has_active_filters`]
    /// and in matching.
    ///
    /// # Example
    /// ```
    /// use mealdrop_catalog::{PriceRange, SearchFilters};
    ///
    /// let filters = SearchFilters {
    ///     cuisine_types: vec!["Italian".to_string(), "Chinese".to_string()],
    ///     price_range: Some(PriceRange::new(5.0, 15.0)),
    ///     ..SearchFilters::default()
    /// };
    ///
    /// let summary = filters.summary();
    /// assert_eq!(summary.active_count, 2);
    /// assert_eq!(summary.fragments, vec!["2 cuisines", "$5-$15"]);
    /// ```
    pub fn summary(&self) -> FilterSummary {
        let mut fragments = Vec::new();

        if !self.cuisine_types.is_empty() {
            fragments.push(count_fragment(
                self.cuisine_types.len(),
                "cuisine",
                "cuisines",
            ));
        }
        if !self.dietary_restrictions.is_empty() {
            fragments.push(count_fragment(
                self.dietary_restrictions.len(),
                "dietary restriction",
                "dietary restrictions",
            ));
        }
        if let Some(range) = &self.price_range {
            fragments.push(format!("${}-${}", range.min, range.max));
        }
        if let Some(min_rating) = self.min_rating {
            fragments.push(format!("≥{}★", min_rating));
        }

        FilterSummary {
            active_count: fragments.len(),
            fragments,
        }
    }
}

fn count_fragment(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}
