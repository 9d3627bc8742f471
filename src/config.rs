//! Configuration for martech-hub.
//!
//! Loaded from ~/.config/martech-hub/martech-hub.yml or ./martech-hub.yml.
//! Selects where the catalog comes from, how the mock collaborators behave
//! and which categories exist.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{CatalogStore, FileCatalogStore, MockCatalogStore};
use crate::domain::{Category, CategorySet, default_categories};
use crate::http::{ApiClient, HttpCatalogStore, HttpSubmissionGateway};
use crate::submission::gateway::DEFAULT_FIRST_ID;
use crate::submission::{MockSubmissionGateway, SubmissionGateway};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub log_level: Option<String>,

    /// Where catalog records come from.
    pub catalog: CatalogConfig,

    /// Remote API settings (used by the `http` source).
    pub api: ApiConfig,

    /// Mock collaborator behavior.
    pub mock: MockConfig,

    /// The closed category set, in display order.
    pub categories: Vec<Category>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            catalog: CatalogConfig::default(),
            api: ApiConfig::default(),
            mock: MockConfig::default(),
            categories: default_categories(),
        }
    }
}

/// Catalog source kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// Built-in listings with simulated latency
    #[default]
    Mock,
    /// JSON/YAML file at `catalog.path`
    File,
    /// Remote API at `api.base-url`
    Http,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    #[serde(rename = "load-delay-ms")]
    pub load_delay_ms: u64,
    #[serde(rename = "lookup-delay-ms")]
    pub lookup_delay_ms: u64,
    #[serde(rename = "submit-delay-ms")]
    pub submit_delay_ms: u64,
    /// First id handed to accepted submissions
    #[serde(rename = "first-id")]
    pub first_id: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 800,
            lookup_delay_ms: 400,
            submit_delay_ms: 1500,
            first_id: DEFAULT_FIRST_ID,
        }
    }
}

impl HubConfig {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. ~/.config/martech-hub/martech-hub.yml
    /// 3. ./martech-hub.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_name = env!("CARGO_PKG_NAME");

        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config = Self::from_yaml(&content)?;
        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate YAML content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            eyre::bail!("categories must not be empty");
        }
        for (i, category) in self.categories.iter().enumerate() {
            if category.id.as_str().trim().is_empty() {
                eyre::bail!("categories[{}] has an empty id", i);
            }
            if self.categories[..i].iter().any(|c| c.id == category.id) {
                eyre::bail!("duplicate category id: {}", category.id);
            }
        }
        match self.catalog.source {
            CatalogSource::File if self.catalog.path.is_none() => {
                eyre::bail!("catalog.path is required when catalog.source is file");
            }
            CatalogSource::Http if self.api.base_url.as_deref().is_none_or(|u| u.trim().is_empty()) => {
                eyre::bail!("api.base-url is required when catalog.source is http");
            }
            _ => {}
        }
        Ok(())
    }

    /// The category set fixed for this session.
    pub fn category_set(&self) -> CategorySet {
        CategorySet::new(self.categories.clone())
    }

    fn api_client(&self) -> Result<ApiClient> {
        let base_url = self
            .api
            .base_url
            .as_deref()
            .ok_or_else(|| eyre::eyre!("api.base-url is not set"))?;
        Ok(ApiClient::new(base_url))
    }

    /// Build the catalog collaborator for the configured source.
    pub fn build_store(&self) -> Result<Arc<dyn CatalogStore>> {
        let store: Arc<dyn CatalogStore> = match self.catalog.source {
            CatalogSource::Mock => Arc::new(MockCatalogStore::seeded().with_delays(
                Duration::from_millis(self.mock.load_delay_ms),
                Duration::from_millis(self.mock.lookup_delay_ms),
            )),
            CatalogSource::File => {
                let path = self
                    .catalog
                    .path
                    .as_ref()
                    .ok_or_else(|| eyre::eyre!("catalog.path is not set"))?;
                Arc::new(FileCatalogStore::new(path))
            }
            CatalogSource::Http => Arc::new(HttpCatalogStore::new(self.api_client()?)),
        };
        Ok(store)
    }

    /// Build the submission collaborator; only the http source submits remotely.
    pub fn build_gateway(&self) -> Result<Arc<dyn SubmissionGateway>> {
        let gateway: Arc<dyn SubmissionGateway> = match self.catalog.source {
            CatalogSource::Http => Arc::new(HttpSubmissionGateway::new(self.api_client()?)),
            CatalogSource::Mock | CatalogSource::File => Arc::new(
                MockSubmissionGateway::new()
                    .with_delay(Duration::from_millis(self.mock.submit_delay_ms))
                    .with_first_id(self.mock.first_id),
            ),
        };
        Ok(gateway)
    }
}
