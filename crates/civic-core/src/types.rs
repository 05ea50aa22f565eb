//! Domain types used by the catalog, the matcher and the resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub type TopicId = String;

/// Canonical routing tag. The set is closed; new categories arrive with a
/// catalog update, never through the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Roads,
    Rubbish,
    Lighting,
    Parks,
    Noise,
    Graffiti,
    Parking,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Roads,
        Category::Rubbish,
        Category::Lighting,
        Category::Parks,
        Category::Noise,
        Category::Graffiti,
        Category::Parking,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Roads => "roads",
            Category::Rubbish => "rubbish",
            Category::Lighting => "lighting",
            Category::Parks => "parks",
            Category::Noise => "noise",
            Category::Graffiti => "graffiti",
            Category::Parking => "parking",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

/// A reportable issue type with the routing metadata of its department.
///
/// - `id`: stable identifier, never reused
/// - `keywords`: extra match terms; order and duplicates carry no meaning
/// - `department_head`/`department_email`: denormalized, identical for every
///   topic of the same `department`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTopic {
    pub id: TopicId,
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub department: String,
    #[serde(alias = "department_head")]
    pub department_head: String,
    #[serde(alias = "department_email")]
    pub department_email: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
}

/// Distinct department contact triple derived from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub head: String,
    pub email: String,
}

/// Routing payload attached verbatim to a new report as its `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAssignment {
    pub department: String,
    pub department_head: String,
    pub department_email: String,
    pub category: Category,
}

impl From<&IssueTopic> for CategoryAssignment {
    fn from(topic: &IssueTopic) -> Self {
        Self {
            department: topic.department.clone(),
            department_head: topic.department_head.clone(),
            department_email: topic.department_email.clone(),
            category: topic.category,
        }
    }
}
