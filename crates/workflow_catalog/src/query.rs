//! Filtered views and aggregate statistics over a catalog

use serde::Serialize;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::types::{is_wildcard, CatalogError, WorkflowRecord};

/// Aggregate numbers shown on the statistics screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowStatistics {
    pub count: usize,
    pub total_installs: u64,
    /// Mean rating rounded to one decimal, 0.0 for an empty catalog
    pub average_rating: f64,
    pub free_count: usize,
}

/// Read-only queries against a shared catalog
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Arc<Catalog>,
}

impl QueryEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Case-insensitive substring search over title, description and tags.
    ///
    /// Results keep catalog order. An empty result is not an error; an empty
    /// query is.
    pub fn search(&self, query: &str) -> Result<Vec<&WorkflowRecord>, CatalogError> {
        if query.is_empty() {
            return Err(CatalogError::EmptyQuery);
        }

        let needle = query.to_lowercase();
        let results: Vec<_> = self
            .catalog
            .all_workflows()
            .iter()
            .filter(|wf| wf.matches_lowercase(&needle))
            .collect();

        log::debug!("Search {:?} matched {} workflow(s)", query, results.len());
        Ok(results)
    }

    /// Records in the given category, or the whole catalog for the wildcard.
    /// Category comparison is exact and case-sensitive.
    pub fn filter_by_category(&self, label: &str) -> Vec<&WorkflowRecord> {
        let workflows = self.catalog.all_workflows();
        if is_wildcard(label) {
            return workflows.iter().collect();
        }

        workflows.iter().filter(|wf| wf.category == label).collect()
    }

    /// Resolve a composite selection label back to a record by title prefix.
    ///
    /// A title that is a prefix of another title can resolve to the wrong
    /// record; interactive selection goes through [`Catalog::find_by_id`].
    pub fn find_by_title_prefix(&self, selection_label: &str) -> Option<&WorkflowRecord> {
        self.catalog
            .all_workflows()
            .iter()
            .find(|wf| selection_label.starts_with(&wf.title))
    }

    pub fn compute_statistics(&self) -> WorkflowStatistics {
        let workflows = self.catalog.all_workflows();
        let count = workflows.len();
        let total_installs = workflows.iter().map(|wf| wf.installs).sum();
        let free_count = workflows.iter().filter(|wf| wf.is_free()).count();

        let average_rating = if count == 0 {
            0.0
        } else {
            let mean = workflows.iter().map(|wf| wf.rating).sum::<f64>() / count as f64;
            (mean * 10.0).round() / 10.0
        };

        WorkflowStatistics {
            count,
            total_installs,
            average_rating,
            free_count,
        }
    }
}
