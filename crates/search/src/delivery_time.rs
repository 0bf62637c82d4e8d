//! Parsing of free-form delivery estimates.

use once_cell::sync::Lazy;
use regex::Regex;

// "30 min", "45 mins", "30 minutes"
static SINGLE_ESTIMATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(\d+)\s*min(?:ute)?s?\s*$").unwrap());

// "25-35 min"; the upper bound is the worst-case estimate
static RANGE_ESTIMATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*\d+\s*-\s*(\d+)\s*min(?:ute)?s?\s*$").unwrap());

/// Extracts a worst-case delivery estimate in minutes.
///
/// Recognizes a single estimate ("30 min") or a hyphenated range
/// ("25-35 min"), keeping the range's upper bound since that is the
/// conservative value filtering cares about. Anything else ("ASAP", "Soon",
/// an empty string) yields `None`: unparseable, which is distinct from zero
/// minutes.
pub fn parse_delivery_time(text: &str) -> Option<u32> {
    if let Some(captures) = RANGE_ESTIMATE.captures(text) {
        return captures[1].parse().ok();
    }
    SINGLE_ESTIMATE
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
}
