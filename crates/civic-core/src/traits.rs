use crate::types::IssueTopic;

/// Read-only view over a set of topics that the matcher can search.
pub trait TopicIndex: Send + Sync {
    /// All topics in insertion order.
    fn topics(&self) -> &[IssueTopic];

    fn get(&self, id: &str) -> Option<&IssueTopic> {
        self.topics().iter().find(|t| t.id == id)
    }
}

