pub mod category;
pub mod workflow;

pub use category::{is_wildcard, ALL_CATEGORIES};
pub use workflow::{CatalogError, WorkflowRecord};
