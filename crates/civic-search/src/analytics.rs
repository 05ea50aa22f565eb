//! Bounded in-process log of search events.
//!
//! Owned by the caller rather than the engine so searching stays free of
//! side effects. When full, the oldest event is evicted.
use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::Serialize;

use civic_core::error::Result;
use civic_core::types::IssueTopic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOutcome {
    Matched,
    Empty,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchEvent {
    pub at: DateTime<Utc>,
    pub query: String,
    pub results: usize,
    pub outcome: SearchOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    pub total: usize,
    pub matched: usize,
    pub empty: usize,
    pub failed: usize,
    pub top_queries: Vec<(String, usize)>,
}

#[derive(Debug, Clone)]
pub struct SearchLog {
    events: VecDeque<SearchEvent>,
    capacity: usize,
}

impl SearchLog {
    /// A zero capacity disables recording.
    pub fn new(capacity: usize) -> Self {
        Self { events: VecDeque::with_capacity(capacity.min(1024)), capacity }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn events(&self) -> impl Iterator<Item = &SearchEvent> {
        self.events.iter()
    }

    pub fn record(&mut self, query: &str, results: usize, outcome: SearchOutcome) {
        if self.capacity == 0 {
            return;
        }
        while self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(SearchEvent { at: Utc::now(), query: query.trim().to_string(), results, outcome });
    }

    pub fn record_result(&mut self, query: &str, result: &Result<Vec<IssueTopic>>) {
        match result {
            Ok(hits) if hits.is_empty() => self.record(query, 0, SearchOutcome::Empty),
            Ok(hits) => self.record(query, hits.len(), SearchOutcome::Matched),
            Err(_) => self.record(query, 0, SearchOutcome::Failed),
        }
    }

    /// Counts per outcome and the `top` most frequent queries (case-folded).
    pub fn summary(&self, top: usize) -> LogSummary {
        let mut summary = LogSummary { total: self.events.len(), ..LogSummary::default() };
        let mut counts: HashMap<String, usize> = HashMap::new();
        for e in &self.events {
            match e.outcome {
                SearchOutcome::Matched => summary.matched += 1,
                SearchOutcome::Empty => summary.empty += 1,
                SearchOutcome::Failed => summary.failed += 1,
            }
            *counts.entry(e.query.to_lowercase()).or_insert(0) += 1;
        }
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(top);
        summary.top_queries = ranked;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::Error;

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = SearchLog::new(2);
        log.record("one", 1, SearchOutcome::Matched);
        log.record("two", 0, SearchOutcome::Empty);
        log.record("three", 3, SearchOutcome::Matched);
        let queries: Vec<&str> = log.events().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["two", "three"]);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut log = SearchLog::new(0);
        log.record("bin", 1, SearchOutcome::Matched);
        assert!(log.is_empty());
    }

    #[test]
    fn failures_are_distinct_from_empty_results() {
        let mut log = SearchLog::new(8);
        log.record_result("bin", &Ok(vec![]));
        log.record_result("bin", &Err(Error::Cancelled));
        let outcomes: Vec<SearchOutcome> = log.events().map(|e| e.outcome).collect();
        assert_eq!(outcomes, vec![SearchOutcome::Empty, SearchOutcome::Failed]);
    }

    #[test]
    fn summary_ranks_frequent_queries() {
        let mut log = SearchLog::new(16);
        for q in ["Bin", "bin", "lamp", "noise", "lamp", "bin"] {
            log.record(q, 1, SearchOutcome::Matched);
        }
        log.record("xyz", 0, SearchOutcome::Empty);
        let s = log.summary(2);
        assert_eq!(s.total, 7);
        assert_eq!(s.matched, 6);
        assert_eq!(s.empty, 1);
        assert_eq!(s.top_queries, vec![("bin".to_string(), 3), ("lamp".to_string(), 2)]);
    }
}
