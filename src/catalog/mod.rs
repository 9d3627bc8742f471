//! Catalog layer - where tool records come from
//!
//! This module provides:
//! - CatalogStore trait for the catalog collaborator
//! - MockCatalogStore serving the built-in listings after a delay
//! - FileCatalogStore reading JSON/YAML from disk
//! - Catalog, the loaded read-only record set

pub mod file;
pub mod mock;
pub mod seed;
pub mod store;

pub use file::{CatalogFormat, FileCatalogStore};
pub use mock::MockCatalogStore;
pub use seed::seed_tools;
pub use store::{CatalogError, CatalogStore};

use std::collections::HashSet;

use crate::domain::ToolRecord;

/// The loaded, read-only set of tool records.
///
/// Ids are unique: when a source returns the same id twice, the first
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tools: Vec<ToolRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ToolRecord>) -> Self {
        let mut seen: HashSet<u64> = HashSet::with_capacity(records.len());
        let mut tools: Vec<ToolRecord> = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id) {
                log::warn!("Dropping duplicate tool id {} ({})", record.id, record.name);
                continue;
            }
            tools.push(record);
        }
        Self { tools }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve a tool by id
    pub fn get(&self, id: u64) -> Option<&ToolRecord> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
