//! Catalog store trait and errors

use async_trait::async_trait;

use crate::domain::ToolRecord;

/// Source of catalog records.
///
/// The controller calls `load_all` exactly once at startup and does all
/// filtering locally over the returned set.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch every tool record.
    async fn load_all(&self) -> Result<Vec<ToolRecord>, CatalogError>;

    /// Fetch a single tool by id.
    async fn find_by_id(&self, id: u64) -> Result<Option<ToolRecord>, CatalogError> {
        let tools = self.load_all().await?;
        Ok(tools.into_iter().find(|t| t.id == id))
    }

    /// Short name for logs.
    fn describe(&self) -> String;
}

/// Errors that can occur while loading the catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Catalog backend unavailable: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
