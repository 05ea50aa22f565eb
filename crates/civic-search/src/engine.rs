use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use civic_core::config::SearchSettings;
use civic_core::error::{Error, Result};
use civic_core::traits::TopicIndex;
use civic_core::types::IssueTopic;

use crate::rank::{normalize, rank_topics};

/// Async search over a read-only topic index.
///
/// Holds no mutable state: concurrent calls never interfere and repeating a
/// call against an unchanged index returns the same sequence. The configured
/// latency stands in for a remote round-trip; cancellation and the deadline
/// surface as `Error::Cancelled` / `Error::TimedOut`, never as an empty result.
pub struct TopicSearchEngine<I: TopicIndex> {
    index: Arc<I>,
    settings: SearchSettings,
}

impl<I: TopicIndex> TopicSearchEngine<I> {
    pub fn new(index: Arc<I>, settings: SearchSettings) -> Self {
        Self { index, settings }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Caller limit, or the default, capped at `max_limit`.
    pub fn effective_limit(&self, limit: Option<usize>) -> usize {
        limit.unwrap_or(self.settings.default_limit).min(self.settings.max_limit)
    }

    /// Synchronous ranking without latency, cancellation or deadline.
    pub fn rank(&self, query: &str, limit: Option<usize>) -> Vec<IssueTopic> {
        rank_topics(self.index.topics(), query, self.effective_limit(limit))
    }

    pub async fn search(&self, query: &str, limit: Option<usize>, cancel: &CancellationToken) -> Result<Vec<IssueTopic>> {
        self.search_until(query, limit, cancel, self.settings.timeout()).await
    }

    /// Like `search` with an explicit deadline in place of the configured one.
    pub async fn search_until(
        &self,
        query: &str,
        limit: Option<usize>,
        cancel: &CancellationToken,
        deadline: Option<Duration>,
    ) -> Result<Vec<IssueTopic>> {
        if normalize(query).is_empty() {
            return Ok(Vec::new());
        }
        let limit = self.effective_limit(limit);
        let latency = self.settings.latency();

        let work = async {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            rank_topics(self.index.topics(), query, limit)
        };
        let bounded = async {
            match deadline {
                Some(d) => tokio::time::timeout(d, work).await.map_err(|_| Error::TimedOut(d)),
                None => Ok(work.await),
            }
        };

        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(Error::Cancelled),
            res = bounded => res,
        };
        match &outcome {
            Ok(hits) => debug!(query, limit, hits = hits.len(), "search complete"),
            Err(e) => debug!(query, error = %e, "search failed"),
        }
        outcome
    }
}
