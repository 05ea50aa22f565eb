use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use tracing::{info, warn};

use civic_core::error::{Error, Result};
use civic_core::traits::TopicIndex;
use civic_core::types::{Category, Department, IssueTopic};

use crate::loader;

/// Read-only collection of issue topics, validated at construction.
///
/// Insertion order is preserved and is the order of `by_category`. The
/// catalog is never mutated after construction; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    topics: Vec<IssueTopic>,
    by_id: HashMap<String, usize>,
}

impl TopicCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let topics = loader::read_topics(path)?;
        let catalog = Self::from_topics(topics)?;
        info!(
            path = %path.display(),
            topics = catalog.len(),
            departments = catalog.departments().len(),
            "loaded topic catalog"
        );
        Ok(catalog)
    }

    pub fn from_topics(mut topics: Vec<IssueTopic>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(topics.len());
        for (i, topic) in topics.iter_mut().enumerate() {
            if topic.id.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!("topic #{i} has an empty id")));
            }
            if topic.title.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!("topic '{}' has an empty title", topic.id)));
            }
            if by_id.insert(topic.id.clone(), i).is_some() {
                return Err(Error::InvalidCatalog(format!("duplicate topic id '{}'", topic.id)));
            }
            dedup_keywords(topic);
        }
        check_departments(&topics)?;
        Ok(Self { topics, by_id })
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IssueTopic> {
        self.topics.iter()
    }

    /// Absence is a normal outcome, not a fault.
    pub fn get_by_id(&self, id: &str) -> Option<&IssueTopic> {
        self.by_id.get(id).map(|&i| &self.topics[i])
    }

    pub fn by_category(&self, category: Category) -> Vec<&IssueTopic> {
        self.topics.iter().filter(|t| t.category == category).collect()
    }

    /// Distinct departments sorted by name, recomputed on every call.
    pub fn departments(&self) -> Vec<Department> {
        let mut seen: BTreeMap<&str, &IssueTopic> = BTreeMap::new();
        for topic in &self.topics {
            seen.entry(topic.department.as_str()).or_insert(topic);
        }
        seen.into_values()
            .map(|t| Department {
                name: t.department.clone(),
                head: t.department_head.clone(),
                email: t.department_email.clone(),
            })
            .collect()
    }
}

impl TopicIndex for TopicCatalog {
    fn topics(&self) -> &[IssueTopic] {
        &self.topics
    }

    fn get(&self, id: &str) -> Option<&IssueTopic> {
        self.get_by_id(id)
    }
}

fn dedup_keywords(topic: &mut IssueTopic) {
    let before = topic.keywords.len();
    let mut seen = HashSet::new();
    topic.keywords.retain(|k| seen.insert(k.clone()));
    if topic.keywords.len() != before {
        warn!(topic = %topic.id, dropped = before - topic.keywords.len(), "dropped duplicate keywords");
    }
}

fn check_departments(topics: &[IssueTopic]) -> Result<()> {
    let mut contacts: HashMap<&str, &IssueTopic> = HashMap::new();
    for topic in topics {
        let first = *contacts.entry(topic.department.as_str()).or_insert(topic);
        if first.department_head != topic.department_head || first.department_email != topic.department_email {
            return Err(Error::InvalidCatalog(format!(
                "department '{}' has conflicting contacts on topics '{}' and '{}'",
                topic.department, first.id, topic.id
            )));
        }
    }
    Ok(())
}
