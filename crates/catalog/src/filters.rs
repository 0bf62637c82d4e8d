//! Filter state and its pure editing helpers.

use serde::{Deserialize, Serialize};

/// Inclusive bounds on the delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
}

impl PriceRange {
    /// Creates a new range.
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `fee` lies within the bounds.
    ///
    /// Out-of-order bounds (min > max) are evaluated literally and match
    /// nothing; ordering the bounds is the caller's responsibility.
    #[inline]
    pub fn contains(&self, fee: f64) -> bool {
        fee >= self.min && fee <= self.max
    }
}

/// Structured filter state for catalog search.
///
/// Each field is one independent dimension. An empty selection or `None`
/// bound means "no constraint on that dimension", never an error.
/// [`SearchFilters::default`] is the canonical empty state used to reset
/// all filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Selected cuisine tags; unique, insertion order preserved for display.
    pub cuisine_types: Vec<String>,
    /// Selected dietary-restriction tags.
    pub dietary_restrictions: Vec<String>,
    /// Inclusive delivery-fee bounds.
    pub price_range: Option<PriceRange>,
    /// Inclusive ceiling on the delivery estimate, in minutes.
    pub max_delivery_time: Option<u32>,
    /// Inclusive floor on the rating.
    pub min_rating: Option<f64>,
}

impl SearchFilters {
    /// Returns a new state with `cuisine` removed if selected, appended
    /// otherwise. The input is left untouched.
    pub fn toggle_cuisine(&self, cuisine: &str) -> Self {
        let mut next = self.clone();
        next.cuisine_types = toggle_tag(&self.cuisine_types, cuisine);
        next
    }

    /// Returns a new state with `restriction` removed if selected, appended
    /// otherwise.
    pub fn toggle_dietary(&self, restriction: &str) -> Self {
        let mut next = self.clone();
        next.dietary_restrictions = toggle_tag(&self.dietary_restrictions, restriction);
        next
    }

    /// Shallow-merges `update` over this state, field by field.
    ///
    /// A field present in `update` fully replaces the corresponding
    /// dimension, including replacing a selection with an empty one or
    /// clearing a bound with an explicit inner `None`. Absent fields carry
    /// over unchanged.
    pub fn merge(&self, update: FiltersUpdate) -> Self {
        Self {
            cuisine_types: update
                .cuisine_types
                .unwrap_or_else(|| self.cuisine_types.clone()),
            dietary_restrictions: update
                .dietary_restrictions
                .unwrap_or_else(|| self.dietary_restrictions.clone()),
            price_range: update.price_range.unwrap_or(self.price_range),
            max_delivery_time: update.max_delivery_time.unwrap_or(self.max_delivery_time),
            min_rating: update.min_rating.unwrap_or(self.min_rating),
        }
    }

    /// Returns true if any dimension constrains the catalog.
    pub fn has_active_filters(&self) -> bool {
        !self.cuisine_types.is_empty()
            || !self.dietary_restrictions.is_empty()
            || self.price_range.is_some()
            || self.max_delivery_time.is_some()
            || self.min_rating.is_some()
    }
}

/// A partial update over [`SearchFilters`].
///
/// `None` in an outer field means "leave the current value unchanged". The
/// optional dimensions use a nested `Option` so an update can distinguish
/// "don't touch the bound" (`None`) from "clear the bound" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct FiltersUpdate {
    pub cuisine_types: Option<Vec<String>>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub price_range: Option<Option<PriceRange>>,
    pub max_delivery_time: Option<Option<u32>>,
    pub min_rating: Option<Option<f64>>,
}

/// Toggle membership of `tag` in an insertion-ordered tag list.
fn toggle_tag(tags: &[String], tag: &str) -> Vec<String> {
    if tags.iter().any(|t| t.as_str() == tag) {
        tags.iter()
            .filter(|t| t.as_str() != tag)
            .cloned()
            .collect()
    } else {
        let mut next = tags.to_vec();
        next.push(tag.to_string());
        next
    }
}
