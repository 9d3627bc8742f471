//! Category lookup entities
//!
//! The category set is closed: it is built once at startup (from defaults or
//! configuration) and never grows afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{HubError, Result};

/// Short code identifying a category ("seo", "crm", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for CategoryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A category shown on the home screen and listing filter bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: CategoryId::new(id),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The closed, ordered set of categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Build a set from an ordered list; later duplicates of an id are ignored
    pub fn new(categories: Vec<Category>) -> Self {
        let mut seen: HashSet<CategoryId> = HashSet::with_capacity(categories.len());
        let mut unique: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            if !seen.insert(category.id.clone()) {
                log::warn!("Ignoring duplicate category id: {}", category.id);
                continue;
            }
            unique.push(category);
        }
        Self { categories: unique }
    }

    /// Look up a category by id
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.get(id).is_some()
    }

    /// Resolve user input to a member id; surrounding whitespace is ignored
    pub fn resolve(&self, id: &str) -> Result<CategoryId> {
        let id = CategoryId::new(id.trim());
        if self.contains(&id) {
            Ok(id)
        } else {
            Err(HubError::UnknownCategory(id.0))
        }
    }

    /// Display label for an id, falling back to the raw id
    pub fn label_for<'a>(&'a self, id: &'a CategoryId) -> &'a str {
        self.get(id).map(|c| c.label.as_str()).unwrap_or(id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(default_categories())
    }
}

/// Categories the directory ships with
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("seo", "SEO & Content", "🔍"),
        Category::new("social", "Social Media", "📱"),
        Category::new("crm", "CRM & Sales", "🤝"),
        Category::new("ai", "AI & Automation", "🤖"),
        Category::new("analytics", "Analytics", "📊"),
        Category::new("ads", "Ads & SEM", "💰"),
    ]
}
