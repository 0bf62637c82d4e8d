//! Empty-state advisory content for the search screen.
//!
//! When a search produces no results the screen needs to explain why and
//! offer a way out. The copy depends on which of the two inputs, the
//! free-text query and the structured filters, is actually constraining
//! the catalog.

use mealdrop_catalog::SearchFilters;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::query::normalize_query;

/// Maximum number of cuisine suggestions surfaced to the UI.
pub const MAX_SUGGESTIONS: usize = 5;

/// Icon shown alongside empty-state copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyStateIcon {
    /// The query found nothing
    Search,
    /// The filters found nothing
    Filter,
    /// Query and filters together found nothing
    Combined,
}

/// User-facing guidance rendered when a search produces no results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyStateContent {
    pub title: String,
    pub message: String,
    pub icon: EmptyStateIcon,
    pub suggestions: Vec<String>,
}

/// The corrective action offered on the empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyStateAction {
    pub label: String,
    pub action: EmptyStateActionKind,
}

/// What tapping the empty-state action should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyStateActionKind {
    ClearFilters,
    ClearSearch,
}

/// Derives the copy for an empty result set.
///
/// Meaningful when `result_count` is zero; the search screen only renders
/// empty-state content in that case. The states are mutually exclusive and
/// checked in order: query only, filters only, both, neither (an empty
/// catalog).
pub fn empty_state_content(
    query: &str,
    filters: &SearchFilters,
    available_cuisines: &[String],
    result_count: usize,
) -> EmptyStateContent {
    let normalized = normalize_query(query);
    let has_query = !normalized.is_empty();
    let has_filters = filters.has_active_filters();

    debug!(
        result_count,
        has_query, has_filters, "deriving empty-state content"
    );

    if has_query && !has_filters {
        let mut suggestions = vec!["Check your spelling".to_string()];
        suggestions.extend(search_suggestions(available_cuisines, query));
        EmptyStateContent {
            title: "No results for your search".to_string(),
            message: format!(
                "We couldn't find anything matching \"{}\". Try a different search term.",
                query.trim()
            ),
            icon: EmptyStateIcon::Search,
            suggestions,
        }
    } else if !has_query && has_filters {
        EmptyStateContent {
            title: "No restaurants match your filters".to_string(),
            message: "Try adjusting your selection to see more restaurants.".to_string(),
            icon: EmptyStateIcon::Filter,
            suggestions: vec!["Try removing some filters".to_string()],
        }
    } else if has_query && has_filters {
        EmptyStateContent {
            title: "No matches found".to_string(),
            message: format!(
                "Nothing matches \"{}\" with the current filters.",
                query.trim()
            ),
            icon: EmptyStateIcon::Combined,
            suggestions: vec![
                "Try removing some filters".to_string(),
                "Try a different search term".to_string(),
            ],
        }
    } else {
        // Neither a query nor filters: the catalog itself is empty
        EmptyStateContent {
            title: "No restaurants found".to_string(),
            message: "There are no restaurants to show right now. Check back soon.".to_string(),
            icon: EmptyStateIcon::Search,
            suggestions: Vec::new(),
        }
    }
}

/// Suggests cuisines for the empty state, capped at [`MAX_SUGGESTIONS`].
///
/// With an empty query this is the head of `available_cuisines` in their
/// given order (the app passes its popular-cuisines list first). Otherwise
/// only cuisines containing the normalized query survive.
pub fn search_suggestions(available_cuisines: &[String], query: &str) -> Vec<String> {
    let normalized = normalize_query(query);

    if normalized.is_empty() {
        return available_cuisines
            .iter()
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect();
    }

    available_cuisines
        .iter()
        .filter(|cuisine| cuisine.to_lowercase().contains(&normalized))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Picks the corrective action for the empty state.
///
/// Clearing filters wins over clearing the search when both could apply;
/// with neither a query nor active filters there is nothing to offer.
pub fn empty_state_action(query: &str, filters: &SearchFilters) -> Option<EmptyStateAction> {
    if filters.has_active_filters() {
        return Some(EmptyStateAction {
            label: "Clear filters".to_string(),
            action: EmptyStateActionKind::ClearFilters,
        });
    }

    if !normalize_query(query).is_empty() {
        return Some(EmptyStateAction {
            label: "Clear search".to_string(),
            action: EmptyStateActionKind::ClearSearch,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuisines(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_query_only_state() {
        let content = empty_state_content(
            "pizzza",
            &SearchFilters::default(),
            &cuisines(&["Italian", "Chinese"]),
            0,
        );

        assert_eq!(content.title, "No results for your search");
        assert_eq!(content.icon, EmptyStateIcon::Search);
        assert!(content.message.contains("\"pizzza\""));
        assert_eq!(content.suggestions[0], "Check your spelling");
    }

    #[test]
    fn test_filters_only_state() {
        let filters = SearchFilters::default().toggle_cuisine("Italian");
        let content = empty_state_content("", &filters, &cuisines(&["Italian"]), 0);

        assert_eq!(content.title, "No restaurants match your filters");
        assert_eq!(content.icon, EmptyStateIcon::Filter);
        assert!(content
            .suggestions
            .contains(&"Try removing some filters".to_string()));
    }

    #[test]
    fn test_combined_state() {
        let filters = SearchFilters::default().toggle_dietary("Vegan");
        let content = empty_state_content("  burgers  ", &filters, &[], 0);

        assert_eq!(content.title, "No matches found");
        assert_eq!(content.icon, EmptyStateIcon::Combined);
        assert!(content.message.contains("\"burgers\""));
        assert!(content
            .suggestions
            .contains(&"Try removing some filters".to_string()));
    }

    #[test]
    fn test_empty_catalog_fallback_state() {
        let content = empty_state_content("", &SearchFilters::default(), &[], 0);

        assert_eq!(content.title, "No restaurants found");
        assert_eq!(content.icon, EmptyStateIcon::Search);
        assert!(content.suggestions.is_empty());
    }

    #[test]
    fn test_suggestions_default_to_popular_cuisines() {
        let available = cuisines(&[
            "Italian", "Chinese", "Thai", "Mexican", "Indian", "Greek", "French",
        ]);
        let suggestions = search_suggestions(&available, "");

        assert_eq!(
            suggestions,
            vec!["Italian", "Chinese", "Thai", "Mexican", "Indian"]
        );
    }

    #[test]
    fn test_suggestions_filter_by_query_substring() {
        let available = cuisines(&["Italian", "Chinese", "Indian", "Thai"]);
        let suggestions = search_suggestions(&available, "IA");

        assert_eq!(suggestions, vec!["Italian", "Indian"]);
    }

    #[test]
    fn test_suggestions_cap_at_five() {
        let available = cuisines(&["A1", "A2", "A3", "A4", "A5", "A6", "A7"]);
        assert_eq!(search_suggestions(&available, "a").len(), 5);
    }

    #[test]
    fn test_action_prefers_clearing_filters() {
        let filters = SearchFilters::default().toggle_cuisine("Italian");
        let action = empty_state_action("pizza", &filters).unwrap();

        assert_eq!(action.label, "Clear filters");
        assert_eq!(action.action, EmptyStateActionKind::ClearFilters);
    }

    #[test]
    fn test_action_clears_search_when_only_query() {
        let action = empty_state_action("pizza", &SearchFilters::default()).unwrap();

        assert_eq!(action.label, "Clear search");
        assert_eq!(action.action, EmptyStateActionKind::ClearSearch);
    }

    #[test]
    fn test_no_action_without_query_or_filters() {
        assert!(empty_state_action("   ", &SearchFilters::default()).is_none());
    }

    #[test]
    fn test_action_kind_wire_names() {
        let json = serde_json::to_string(&EmptyStateActionKind::ClearFilters).unwrap();
        assert_eq!(json, "\"clearFilters\"");
    }
}
