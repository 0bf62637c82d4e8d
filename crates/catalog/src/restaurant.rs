//! The restaurant record as delivered by the catalog feed.

use serde::{Deserialize, Serialize};

/// A single restaurant listing.
///
/// Field names follow the catalog feed's JSON (camelCase, with the feed's
/// historical `cuisineType` array name). The search core reads these records
/// but never mutates them; ownership stays with the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Marketing copy shown on the card; searchable.
    #[serde(default)]
    pub description: String,
    /// Cuisine tags in display order. Order matters for rendering, not for
    /// matching. May be empty.
    #[serde(rename = "cuisineType", default)]
    pub cuisine_types: Vec<String>,
    /// Dietary tags ("Vegetarian", "Vegan", ...). Records without the field
    /// behave as the empty set.
    #[serde(rename = "dietaryOptions", default)]
    pub dietary_options: Vec<String>,
    /// Average rating in [0, 5].
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: u32,
    /// Free-form delivery estimate, e.g. "30 min" or "25-35 min". Feeds also
    /// send unstructured values ("ASAP") that the core treats as unparseable.
    #[serde(default)]
    pub delivery_time: String,
    /// Delivery fee in the feed's currency; never negative.
    #[serde(default)]
    pub delivery_fee: f64,
    /// Minimum order amount.
    #[serde(default)]
    pub minimum_order: f64,
    /// Whether the restaurant currently accepts orders.
    #[serde(default)]
    pub is_open: bool,
    /// Address / coordinate payload; opaque to the search core.
    #[serde(default)]
    pub address: serde_json::Value,
}

impl Restaurant {
    /// Returns true if the record carries sane values for the fields the
    /// search core relies on.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && !self.name.is_empty()
            && (0.0..=5.0).contains(&self.rating)
            && self.delivery_fee >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Restaurant {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parses_feed_record() {
        let restaurant = parse(json!({
            "id": "r-100",
            "name": "Italian Bistro",
            "description": "Fresh pasta daily",
            "cuisineType": ["Italian", "Mediterranean"],
            "rating": 4.5,
            "reviewCount": 230,
            "deliveryTime": "25-35 min",
            "deliveryFee": 3.99,
            "minimumOrder": 15.0,
            "isOpen": true,
            "address": {"street": "12 Via Roma", "coordinates": [13.4, 52.5]}
        }));

        assert_eq!(restaurant.cuisine_types, vec!["Italian", "Mediterranean"]);
        assert_eq!(restaurant.review_count, 230);
        assert_eq!(restaurant.delivery_time, "25-35 min");
        assert!(restaurant.is_open);
        assert!(restaurant.is_valid());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let restaurant = parse(json!({
            "id": "r-101",
            "name": "Corner Deli"
        }));

        assert!(restaurant.cuisine_types.is_empty());
        assert!(restaurant.dietary_options.is_empty());
        assert_eq!(restaurant.delivery_time, "");
        assert!(restaurant.address.is_null());
    }

    #[test]
    fn test_is_valid_rejects_out_of_range_rating() {
        let mut restaurant = parse(json!({"id": "r-102", "name": "Test", "rating": 4.0}));
        assert!(restaurant.is_valid());

        restaurant.rating = 5.1;
        assert!(!restaurant.is_valid());
    }
}
