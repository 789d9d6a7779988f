pub mod catalog;
pub mod installer;
pub mod presentation;
pub mod query;
pub mod types;

pub use catalog::Catalog;
pub use installer::{InstallReport, WorkflowInstaller};
pub use query::{QueryEngine, WorkflowStatistics};
pub use types::{CatalogError, WorkflowRecord, ALL_CATEGORIES};
