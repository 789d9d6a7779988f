//! The fixed, read-only workflow catalog

use std::collections::HashSet;

use crate::types::{is_wildcard, CatalogError, WorkflowRecord, ALL_CATEGORIES};

/// An immutable, ordered set of workflow records and category labels.
///
/// Built once at start-up and shared by reference; nothing mutates it.
#[derive(Debug, Clone)]
pub struct Catalog {
    workflows: Vec<WorkflowRecord>,
    categories: Vec<String>,
}

impl Catalog {
    pub fn new(workflows: Vec<WorkflowRecord>, categories: Vec<String>) -> Self {
        Self {
            workflows,
            categories,
        }
    }

    /// The marketplace sample catalog shipped with the CLI
    pub fn builtin() -> Self {
        let workflows = vec![
            record(
                "1",
                "Auto PR Reviewer",
                "Automatically review pull requests with AI-powered insights",
                29,
                4.8,
                2341,
                "Code Review",
                &["AI", "Code Review", "Automation"],
            ),
            record(
                "2",
                "Deploy Master",
                "One-click deployment to multiple cloud providers",
                49,
                4.9,
                892,
                "CI/CD",
                &["Deployment", "DevOps", "Cloud"],
            ),
            record(
                "3",
                "Test Suite Pro",
                "Comprehensive testing workflow with coverage reports",
                0,
                4.7,
                5678,
                "Testing",
                &["Testing", "Coverage", "Quality"],
            ),
            record(
                "4",
                "Security Scanner",
                "Multi-layer security scanning for your repositories",
                29,
                4.6,
                543,
                "Security",
                &["Security", "Vulnerability"],
            ),
            record(
                "5",
                "Auto Docs Generator",
                "Automatically generate documentation from code",
                15,
                4.5,
                321,
                "Documentation",
                &["Docs", "API", "Automation"],
            ),
            record(
                "6",
                "ML Pipeline Runner",
                "End-to-end ML pipeline with training and deployment",
                49,
                4.9,
                654,
                "AI & ML",
                &["Machine Learning", "ML", "Pipeline"],
            ),
        ];

        let categories = [
            ALL_CATEGORIES,
            "CI/CD",
            "Code Review",
            "Testing",
            "Security",
            "Documentation",
            "AI & ML",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect();

        Self::new(workflows, categories)
    }

    /// All workflow records in catalog order
    pub fn all_workflows(&self) -> &[WorkflowRecord] {
        &self.workflows
    }

    /// All category labels, wildcard first
    pub fn all_categories(&self) -> &[String] {
        &self.categories
    }

    /// Get a workflow by its unique id
    pub fn find_by_id(&self, id: &str) -> Option<&WorkflowRecord> {
        self.workflows.iter().find(|wf| wf.id == id)
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// Check the data-integrity preconditions the query engine relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self.categories.first() {
            Some(first) if is_wildcard(first) => {}
            _ => return Err(CatalogError::MissingWildcard),
        }

        let mut seen = HashSet::new();
        for wf in &self.workflows {
            if !seen.insert(wf.id.as_str()) {
                return Err(CatalogError::DuplicateId(wf.id.clone()));
            }
            if !(0.0..=5.0).contains(&wf.rating) {
                return Err(CatalogError::InvalidRating {
                    id: wf.id.clone(),
                    rating: wf.rating,
                });
            }
            if is_wildcard(&wf.category) || !self.has_category(&wf.category) {
                return Err(CatalogError::UnknownCategory(wf.category.clone()));
            }
        }

        log::debug!(
            "Catalog valid: {} workflow(s), {} categories",
            self.workflows.len(),
            self.categories.len()
        );
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    description: &str,
    price: u32,
    rating: f64,
    installs: u64,
    category: &str,
    tags: &[&str],
) -> WorkflowRecord {
    WorkflowRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price,
        rating,
        installs,
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.all_workflows().len(), 6);
        assert_eq!(catalog.all_categories().len(), 7);
        assert_eq!(catalog.all_categories()[0], ALL_CATEGORIES);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find_by_id("3").unwrap().title, "Test Suite Pro");
        assert!(catalog.find_by_id("42").is_none());
    }

    #[test]
    fn test_validate_duplicate_id() {
        let mut workflows = Catalog::builtin().all_workflows().to_vec();
        workflows[1].id = "1".to_string();
        let catalog = Catalog::new(workflows, Catalog::builtin().all_categories().to_vec());
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId("1".to_string()))
        );
    }

    #[test]
    fn test_validate_unknown_category() {
        let mut workflows = Catalog::builtin().all_workflows().to_vec();
        workflows[0].category = "Games".to_string();
        let catalog = Catalog::new(workflows, Catalog::builtin().all_categories().to_vec());
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownCategory("Games".to_string()))
        );
    }

    #[test]
    fn test_validate_requires_wildcard_first() {
        let catalog = Catalog::new(Vec::new(), vec!["Testing".to_string()]);
        assert_eq!(catalog.validate(), Err(CatalogError::MissingWildcard));
    }

    #[test]
    fn test_validate_rating_range() {
        let mut workflows = Catalog::builtin().all_workflows().to_vec();
        workflows[2].rating = 5.5;
        let catalog = Catalog::new(workflows, Catalog::builtin().all_categories().to_vec());
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidRating { .. })
        ));
    }
}
