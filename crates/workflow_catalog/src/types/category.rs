//! Category labels for workflows

/// Wildcard label meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All Categories";

/// Returns true when the label is the wildcard category
pub fn is_wildcard(label: &str) -> bool {
    label == ALL_CATEGORIES
}
