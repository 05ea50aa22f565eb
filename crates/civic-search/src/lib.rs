//! civic-search
//!
//! Maps free-text descriptions onto ranked issue topics. `rank` holds the
//! pure matching and ordering rules, `engine` wraps them in the async,
//! cancellable search call, and `analytics` keeps a bounded log of searches
//! for callers that want one.
pub mod analytics;
pub mod engine;
pub mod rank;

pub use analytics::{SearchLog, SearchOutcome};
pub use engine::TopicSearchEngine;
pub use rank::{rank_topics, MatchTier};
