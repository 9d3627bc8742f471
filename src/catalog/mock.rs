//! In-memory catalog with simulated latency

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::seed::seed_tools;
use super::store::{CatalogError, CatalogStore};
use crate::domain::ToolRecord;

/// Default delay before `load_all` resolves
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(800);

/// Default delay before `find_by_id` resolves
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(400);

/// Catalog backed by a static record set.
#[derive(Debug)]
pub struct MockCatalogStore {
    tools: Vec<ToolRecord>,
    load_delay: Duration,
    lookup_delay: Duration,
    failure: Option<String>,
    load_calls: AtomicUsize,
}

impl MockCatalogStore {
    /// Create a store serving the given records
    pub fn new(tools: Vec<ToolRecord>) -> Self {
        Self {
            tools,
            load_delay: DEFAULT_LOAD_DELAY,
            lookup_delay: DEFAULT_LOOKUP_DELAY,
            failure: None,
            load_calls: AtomicUsize::new(0),
        }
    }

    /// Create a store serving the built-in listings
    pub fn seeded() -> Self {
        Self::new(seed_tools())
    }

    /// Create a store whose every call fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        let mut store = Self::new(Vec::new());
        store.failure = Some(reason.into());
        store
    }

    pub fn with_delays(mut self, load_delay: Duration, lookup_delay: Duration) -> Self {
        self.load_delay = load_delay;
        self.lookup_delay = lookup_delay;
        self
    }

    /// Resolve immediately
    pub fn without_delay(self) -> Self {
        self.with_delays(Duration::ZERO, Duration::ZERO)
    }

    /// Number of times `load_all` has been called
    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), CatalogError> {
        match &self.failure {
            Some(reason) => Err(CatalogError::Backend(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogStore for MockCatalogStore {
    async fn load_all(&self) -> Result<Vec<ToolRecord>, CatalogError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.load_delay).await;
        self.check_failure()?;
        log::debug!("Mock catalog served {} tools", self.tools.len());
        Ok(self.tools.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<ToolRecord>, CatalogError> {
        tokio::time::sleep(self.lookup_delay).await;
        self.check_failure()?;
        Ok(self.tools.iter().find(|t| t.id == id).cloned())
    }

    fn describe(&self) -> String {
        format!("mock ({} tools)", self.tools.len())
    }
}
