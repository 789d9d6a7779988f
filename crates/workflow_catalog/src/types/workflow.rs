//! Workflow-related type definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog lookup and integrity errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Workflow not found: {0}")]
    NotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Please enter a search term")]
    EmptyQuery,

    #[error("Duplicate workflow id: {0}")]
    DuplicateId(String),

    #[error("Rating {rating} of workflow {id} is outside 0-5")]
    InvalidRating { id: String, rating: f64 },

    #[error("Category list must start with the wildcard label")]
    MissingWildcard,
}

/// A single listing in the workflow catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    /// Unique identifier among all records
    pub id: String,

    /// Display name
    pub title: String,

    pub description: String,

    /// Price in whole dollars, 0 means free
    pub price: u32,

    /// Average rating in [0, 5]
    pub rating: f64,

    pub installs: u64,

    /// Must be one of the catalog's category labels (never the wildcard)
    pub category: String,

    pub tags: Vec<String>,
}

impl WorkflowRecord {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    /// Case-insensitive substring match against title, description and tags.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}
