//! civic-core
//!
//! Domain types shared by the topic catalog and the matcher, the error
//! taxonomy, and the figment-backed configuration loader.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use types::{Category, CategoryAssignment, Department, IssueTopic};
