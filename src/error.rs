//! Error types for martech-hub
//!
//! Centralized error handling using thiserror. The collaborator-facing
//! failures (`CatalogError`, `SubmissionError`) live next to their traits and
//! convert into `HubError` for callers that want a single error type.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::submission::SubmissionError;

/// All error types that can occur in martech-hub
#[derive(Debug, Error)]
pub enum HubError {
    /// Tool not found in the catalog
    #[error("Tool not found: {0}")]
    ToolNotFound(u64),

    /// Category id outside the configured set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Price filter name that does not name a bucket
    #[error("Unknown price filter: {0}")]
    UnknownPriceFilter(String),

    /// The catalog collaborator could not supply records
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The submission collaborator rejected or could not process a draft
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

/// Result type alias for martech-hub operations
pub type Result<T> = std::result::Result<T, HubError>;
