//! Structured filter matching.

use mealdrop_catalog::{Restaurant, SearchFilters};

use crate::delivery_time::parse_delivery_time;

/// Returns true if `restaurant` satisfies every present dimension of
/// `filters`.
///
/// Dimensions AND together; an absent dimension imposes no constraint.
///
/// - Cuisine and dietary selections match on intersection: at least one
///   selected tag must appear on the restaurant. A restaurant without
///   dietary data behaves as the empty set, so any dietary selection
///   excludes it.
/// - The delivery fee must lie within the inclusive price range.
/// - The parsed worst-case delivery estimate must not exceed the ceiling.
///   Unparseable estimates fail open so malformed feed data never hides a
///   listing.
/// - The rating must meet the inclusive floor.
pub fn matches_filters(restaurant: &Restaurant, filters: &SearchFilters) -> bool {
    if !filters.cuisine_types.is_empty()
        && !intersects(&restaurant.cuisine_types, &filters.cuisine_types)
    {
        return false;
    }

    if !filters.dietary_restrictions.is_empty()
        && !intersects(&restaurant.dietary_options, &filters.dietary_restrictions)
    {
        return false;
    }

    if let Some(range) = &filters.price_range {
        if !range.contains(restaurant.delivery_fee) {
            return false;
        }
    }

    if let Some(max_minutes) = filters.max_delivery_time {
        if let Some(minutes) = parse_delivery_time(&restaurant.delivery_time) {
            if minutes > max_minutes {
                return false;
            }
        }
    }

    if let Some(min_rating) = filters.min_rating {
        if restaurant.rating < min_rating {
            return false;
        }
    }

    true
}

/// True if the two tag lists share at least one tag.
fn intersects(restaurant_tags: &[String], selected: &[String]) -> bool {
    selected
        .iter()
        .any(|tag| restaurant_tags.iter().any(|t| t == tag))
}
