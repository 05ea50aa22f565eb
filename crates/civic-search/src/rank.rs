//! Substring matching and two-tier ranking over catalog topics.
//!
//! A topic is a candidate when the trimmed, lowercased query is a substring of
//! its title, any keyword, or its department name. Title matches sort before
//! keyword/department-only matches; each tier is ordered by title so the
//! result never depends on catalog insertion order.
use std::cmp::Ordering;

use civic_core::types::IssueTopic;

/// Ranking bucket of a candidate; lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Title,
    KeywordOrDepartment,
}

pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// `needle` must already be normalized.
pub fn match_tier(topic: &IssueTopic, needle: &str) -> Option<MatchTier> {
    if topic.title.to_lowercase().contains(needle) {
        return Some(MatchTier::Title);
    }
    let in_keywords = topic.keywords.iter().any(|k| k.to_lowercase().contains(needle));
    if in_keywords || topic.department.to_lowercase().contains(needle) {
        Some(MatchTier::KeywordOrDepartment)
    } else {
        None
    }
}

pub fn rank_topics(topics: &[IssueTopic], query: &str, limit: usize) -> Vec<IssueTopic> {
    let needle = normalize(query);
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<(MatchTier, String, &IssueTopic)> = topics
        .iter()
        .filter_map(|t| match_tier(t, &needle).map(|tier| (tier, t.title.to_lowercase(), t)))
        .collect();
    candidates.sort_by(|a, b| by_tier_then_title(a, b));

    candidates.into_iter().take(limit).map(|(_, _, t)| t.clone()).collect()
}

fn by_tier_then_title(a: &(MatchTier, String, &IssueTopic), b: &(MatchTier, String, &IssueTopic)) -> Ordering {
    a.0.cmp(&b.0)
        .then_with(|| a.1.cmp(&b.1))
        .then_with(|| a.2.title.cmp(&b.2.title))
        .then_with(|| a.2.id.cmp(&b.2.id))
}
