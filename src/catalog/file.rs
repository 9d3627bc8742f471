//! Catalog read from a JSON or YAML file on disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::store::{CatalogError, CatalogStore};
use crate::domain::ToolRecord;

/// On-disk format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Detect the format from a path; anything not `.yml`/`.yaml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_lowercase()) {
            Some(ext) if ext == "yml" || ext == "yaml" => CatalogFormat::Yaml,
            _ => CatalogFormat::Json,
        }
    }

    /// Parse an array of records
    pub fn parse(self, content: &str) -> Result<Vec<ToolRecord>, CatalogError> {
        let tools = match self {
            CatalogFormat::Json => serde_json::from_str(content)?,
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(tools)
    }
}

/// Catalog backed by a single file holding an array of tool records.
#[derive(Debug, Clone)]
pub struct FileCatalogStore {
    path: PathBuf,
    format: CatalogFormat,
}

impl FileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = CatalogFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogStore for FileCatalogStore {
    async fn load_all(&self) -> Result<Vec<ToolRecord>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let tools = self.format.parse(&content)?;
        log::info!("Loaded {} tools from {}", tools.len(), self.path.display());
        Ok(tools)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
