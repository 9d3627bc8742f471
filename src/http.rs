//! Remote catalog API client
//!
//! Implements `CatalogStore` and `SubmissionGateway` against the directory's
//! HTTP API:
//! - `GET  {base}/api/tools`       → `[ToolRecord]`
//! - `GET  {base}/api/tools/{id}`  → `ToolRecord` (404 when absent)
//! - `POST {base}/api/tools`       → `{ "success": bool, "id": u64? }`
//!
//! No request timeout is configured; a backend that never answers leaves the
//! caller waiting.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::catalog::{CatalogError, CatalogStore};
use crate::domain::ToolRecord;
use crate::submission::{SubmissionError, SubmissionGateway, SubmissionReceipt, ToolDraft};

/// Path of the tools collection under the base URL
const TOOLS_PATH: &str = "/api/tools";

/// Shared HTTP settings for the catalog API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the tools collection
    pub fn tools_url(&self) -> String {
        format!("{}{}", self.base_url, TOOLS_PATH)
    }

    /// URL of a single tool
    pub fn tool_url(&self, id: u64) -> String {
        format!("{}/{}", self.tools_url(), id)
    }
}

/// Catalog served by the remote API
#[derive(Debug, Clone)]
pub struct HttpCatalogStore {
    api: ApiClient,
}

impl HttpCatalogStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

async fn error_body(response: reqwest::Response) -> String {
    response.text().await.unwrap_or_else(|_| "Unknown error".to_string())
}

#[async_trait]
impl CatalogStore for HttpCatalogStore {
    async fn load_all(&self) -> Result<Vec<ToolRecord>, CatalogError> {
        let url = self.api.tools_url();
        log::debug!("GET {}", url);
        let response = self.api.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        let tools: Vec<ToolRecord> = response.json().await?;
        log::info!("Fetched {} tools from {}", tools.len(), url);
        Ok(tools)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<ToolRecord>, CatalogError> {
        let url = self.api.tool_url(id);
        log::debug!("GET {}", url);
        let response = self.api.client.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        Ok(Some(response.json().await?))
    }

    fn describe(&self) -> String {
        format!("http {}", self.api.tools_url())
    }
}

/// Body returned by the submission endpoint
#[derive(Debug, Clone, Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    id: Option<u64>,
}

impl From<SubmitResponse> for SubmissionReceipt {
    fn from(response: SubmitResponse) -> Self {
        if response.success {
            SubmissionReceipt::accepted(response.id)
        } else {
            SubmissionReceipt::declined()
        }
    }
}

/// Submission endpoint of the remote API
#[derive(Debug, Clone)]
pub struct HttpSubmissionGateway {
    api: ApiClient,
}

impl HttpSubmissionGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SubmissionGateway for HttpSubmissionGateway {
    async fn submit(&self, draft: &ToolDraft) -> Result<SubmissionReceipt, SubmissionError> {
        let url = self.api.tools_url();
        log::info!("POST {} ({})", url, draft.name);
        let response = self.api.client.post(&url).json(draft).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Api {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        let body: SubmitResponse = response.json().await?;
        Ok(body.into())
    }

    fn describe(&self) -> String {
        format!("http {}", self.api.tools_url())
    }
}
