//! Per-line handling for the interactive prompt.
//!
//! Applies the minimum-length gate before searching, records every search in
//! the bounded log and keeps the last result list for `:pick`.
use anyhow::Result;
use tokio_util::sync::CancellationToken;

use civic_catalog::{CategoryResolver, TopicCatalog};
use civic_core::types::IssueTopic;
use civic_search::SearchLog;

use crate::{format_topics, App};

pub const HELP: &str = "Type a description to search. Commands: :pick <n>  :stats  :recent  :help  :quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// Leave the prompt, printing the message first if any.
    Quit(Option<String>),
}

pub struct Session {
    log: SearchLog,
    last: Vec<IssueTopic>,
    min_query_len: usize,
}

impl Session {
    pub fn new(app: &App) -> Self {
        Self {
            log: SearchLog::new(app.settings.analytics.capacity),
            last: Vec::new(),
            min_query_len: app.settings.ui.min_query_len,
        }
    }

    pub fn log(&self) -> &SearchLog {
        &self.log
    }

    pub async fn handle_line(&mut self, app: &App, line: &str, cancel: &CancellationToken) -> Result<Reply> {
        let input = line.trim();
        let reply = match input.split_once(' ').map_or((input, ""), |(c, rest)| (c, rest.trim())) {
            (":quit" | ":q", _) => Reply::Quit(None),
            (":help", _) => Reply::Text(HELP.to_string()),
            (":stats", _) => {
                let s = self.log.summary(5);
                let mut out = format!("📊 {} searches: {} matched, {} empty, {} failed", s.total, s.matched, s.empty, s.failed);
                for (query, count) in s.top_queries {
                    out.push_str(&format!("\n  {count:>3}  {query}"));
                }
                Reply::Text(out)
            }
            (":recent", _) => Reply::Text(
                self.log
                    .events()
                    .map(|e| format!("  {}  {:<24} {:?} ({})", e.at.format("%H:%M:%S"), e.query, e.outcome, e.results))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            (":pick", n) => match n.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| self.last.get(i)) {
                Some(topic) => Reply::Text(serde_json::to_string_pretty(&CategoryResolver::<TopicCatalog>::resolve(topic))?),
                None => Reply::Text("❌ Pick a number from the last result list".to_string()),
            },
            _ if input.chars().count() < self.min_query_len => {
                Reply::Text(format!("✏️  Type at least {} characters", self.min_query_len))
            }
            _ => {
                let result = app.engine.search(input, None, &cancel.child_token()).await;
                self.log.record_result(input, &result);
                match result {
                    Ok(hits) if hits.is_empty() => Reply::Text(format!("No topics match \"{input}\"")),
                    Ok(hits) => {
                        let out = format_topics(&hits);
                        self.last = hits;
                        Reply::Text(out)
                    }
                    Err(e) if cancel.is_cancelled() => Reply::Quit(Some(format!("Search aborted: {e}"))),
                    Err(e) => Reply::Text(format!("⚠️  Search failed ({e}); try again")),
                }
            }
        };
        Ok(reply)
    }
}
