use std::sync::Arc;

use civic_core::error::{Error, Result};
use civic_core::traits::TopicIndex;
use civic_core::types::{CategoryAssignment, IssueTopic};

/// Projects a chosen topic onto the routing payload of a new report.
pub struct CategoryResolver<I: TopicIndex> {
    index: Arc<I>,
}

impl<I: TopicIndex> CategoryResolver<I> {
    pub fn new(index: Arc<I>) -> Self {
        Self { index }
    }

    pub fn resolve(topic: &IssueTopic) -> CategoryAssignment {
        CategoryAssignment::from(topic)
    }

    pub fn resolve_id(&self, id: &str) -> Result<CategoryAssignment> {
        self.index
            .get(id)
            .map(Self::resolve)
            .ok_or_else(|| Error::NotFound(format!("topic '{id}'")))
    }
}
