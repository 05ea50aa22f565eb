//! Shared plumbing for the `civic` and `civic-interactive` binaries: logging
//! setup, catalog/engine construction and the one-shot command dispatcher.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use civic_catalog::{CategoryResolver, TopicCatalog};
use civic_core::config::{Config, Settings};
use civic_core::error::Error;
use civic_core::types::{Category, IssueTopic};
use civic_search::TopicSearchEngine;

pub mod session;

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` overrides
/// the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { query: String, limit: Option<usize> },
    Topic { id: String },
    Category { category: Category },
    Departments,
    Resolve { id: String },
    Validate { path: Option<PathBuf> },
}

pub const USAGE: &str = "Usage: civic [--json] <search <query> [limit] | topic <id> | category <name> | departments | resolve <id> | validate [path]>";

impl Command {
    pub fn parse(mut args: Vec<String>) -> Result<Self> {
        if args.is_empty() {
            bail!("{USAGE}");
        }
        let cmd = args.remove(0);
        let first = args.first().cloned();
        let required = |what: &str| first.clone().ok_or_else(|| anyhow!("missing {what}\n{USAGE}"));
        let command = match cmd.as_str() {
            "search" => {
                let query = required("query")?;
                let limit = match args.get(1) {
                    Some(raw) => Some(raw.parse::<usize>().with_context(|| format!("invalid limit '{raw}'"))?),
                    None => None,
                };
                Command::Search { query, limit }
            }
            "topic" => Command::Topic { id: required("topic id")? },
            "category" => Command::Category { category: required("category")?.parse()? },
            "departments" => Command::Departments,
            "resolve" => Command::Resolve { id: required("topic id")? },
            "validate" => Command::Validate { path: first.clone().map(PathBuf::from) },
            other => bail!("Unknown command: {other}\n{USAGE}"),
        };
        Ok(command)
    }
}

pub struct App {
    pub settings: Settings,
    pub engine: TopicSearchEngine<TopicCatalog>,
    pub resolver: CategoryResolver<TopicCatalog>,
}

impl App {
    pub fn from_config(config: &Config) -> Result<Self> {
        let path = config.catalog_path()?;
        let catalog = TopicCatalog::load(&path).with_context(|| format!("loading catalog {}", path.display()))?;
        Ok(Self::new(config.settings()?, Arc::new(catalog)))
    }

    pub fn new(settings: Settings, catalog: Arc<TopicCatalog>) -> Self {
        let engine = TopicSearchEngine::new(Arc::clone(&catalog), settings.search.clone());
        let resolver = CategoryResolver::new(catalog);
        Self { settings, engine, resolver }
    }

    pub fn catalog(&self) -> &TopicCatalog {
        self.engine.index()
    }

    pub async fn run(&self, command: &Command, json: bool, cancel: &CancellationToken) -> Result<String> {
        let out = match command {
            Command::Search { query, limit } => {
                let hits = self.engine.search(query, *limit, cancel).await?;
                if json {
                    serde_json::to_string_pretty(&hits)?
                } else if hits.is_empty() {
                    format!("No topics match \"{}\"", query.trim())
                } else {
                    format_topics(&hits)
                }
            }
            Command::Topic { id } => match self.catalog().get_by_id(id) {
                Some(t) if json => serde_json::to_string_pretty(t)?,
                Some(t) => format_topic_detail(t),
                None => format!("No topic with id '{id}'"),
            },
            Command::Category { category } => {
                let topics: Vec<IssueTopic> = self.catalog().by_category(*category).into_iter().cloned().collect();
                if json { serde_json::to_string_pretty(&topics)? } else { format_topics(&topics) }
            }
            Command::Departments => {
                let departments = self.catalog().departments();
                if json {
                    serde_json::to_string_pretty(&departments)?
                } else {
                    departments
                        .iter()
                        .map(|d| format!("{:<24} {:<20} {}", d.name, d.head, d.email))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::Resolve { id } => match self.resolver.resolve_id(id) {
                Ok(assignment) => serde_json::to_string_pretty(&assignment)?,
                Err(Error::NotFound(_)) if json => "null".to_string(),
                Err(Error::NotFound(_)) => format!("No topic with id '{id}'"),
                Err(e) => return Err(e.into()),
            },
            Command::Validate { path: Some(p) } => validate_catalog(p)?,
            Command::Validate { path: None } => catalog_summary(self.catalog()),
        };
        Ok(out)
    }
}

/// Loads and validates a catalog on its own, without the configured one.
pub fn validate_catalog(path: &Path) -> Result<String> {
    let catalog = TopicCatalog::load(path).with_context(|| format!("validating catalog {}", path.display()))?;
    Ok(catalog_summary(&catalog))
}

fn catalog_summary(catalog: &TopicCatalog) -> String {
    format!("OK: {} topics, {} departments", catalog.len(), catalog.departments().len())
}

pub fn format_topics(topics: &[IssueTopic]) -> String {
    topics
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{:>2}. {:<32} [{}] {}", i + 1, t.title, t.category, t.department))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_topic_detail(t: &IssueTopic) -> String {
    format!(
        "{}\n  id:          {}\n  category:    {}\n  department:  {} ({} <{}>)\n  keywords:    {}\n  {}",
        t.title,
        t.id,
        t.category,
        t.department,
        t.department_head,
        t.department_email,
        t.keywords.join(", "),
        t.description
    )
}
