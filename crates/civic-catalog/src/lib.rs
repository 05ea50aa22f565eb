//! civic-catalog
//!
//! The immutable issue-topic catalog (loading, validation, lookups and the
//! derived department view) and the category resolver that turns a chosen
//! topic into the routing payload of a report.
pub mod catalog;
pub mod loader;
pub mod resolver;

pub use catalog::TopicCatalog;
pub use resolver::CategoryResolver;
