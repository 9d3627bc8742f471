//! Submission gateway trait, receipts and the mock gateway

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use super::draft::{DraftField, ToolDraft};

/// Default delay before the mock gateway answers
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// First id handed out by the mock gateway
pub const DEFAULT_FIRST_ID: u64 = 1000;

/// Accepts drafts on behalf of the directory's editorial backend.
///
/// No retry and no deduplication: overlapping calls are independent.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Forward a validated draft.
    async fn submit(&self, draft: &ToolDraft) -> Result<SubmissionReceipt, SubmissionError>;

    /// Short name for logs.
    fn describe(&self) -> String;
}

/// What the gateway said about a draft
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub accepted: bool,
    /// Id reserved for the listing, when the backend assigns one
    pub assigned_id: Option<u64>,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn accepted(assigned_id: Option<u64>) -> Self {
        Self {
            accepted: true,
            assigned_id,
            received_at: Utc::now(),
        }
    }

    pub fn declined() -> Self {
        Self {
            accepted: false,
            assigned_id: None,
            received_at: Utc::now(),
        }
    }
}

/// Errors that can occur while submitting a draft
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// Local pre-flight check failed; the gateway was not contacted
    #[error("Missing required fields: {}", format_fields(.missing))]
    Invalid { missing: Vec<DraftField> },

    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Submission transport failed: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// True when the draft itself was incomplete
    pub fn is_local(&self) -> bool {
        matches!(self, SubmissionError::Invalid { .. })
    }
}

fn format_fields(fields: &[DraftField]) -> String {
    fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
}

/// Gateway that accepts everything after a delay and hands out sequential ids.
#[derive(Debug)]
pub struct MockSubmissionGateway {
    delay: Duration,
    next_id: AtomicU64,
    failure: Option<String>,
    calls: AtomicUsize,
    received: Mutex<Vec<ToolDraft>>,
}

impl MockSubmissionGateway {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_SUBMIT_DELAY,
            next_id: AtomicU64::new(DEFAULT_FIRST_ID),
            failure: None,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Create a gateway whose transport always fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        let mut gateway = Self::new();
        gateway.failure = Some(reason.into());
        gateway
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_first_id(self, first_id: u64) -> Self {
        self.next_id.store(first_id, Ordering::SeqCst);
        self
    }

    /// Number of times `submit` reached the gateway
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Drafts accepted so far
    pub fn received(&self) -> Vec<ToolDraft> {
        match self.received.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for MockSubmissionGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionGateway for MockSubmissionGateway {
    async fn submit(&self, draft: &ToolDraft) -> Result<SubmissionReceipt, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        log::info!("Submitting tool: {}", draft.name);
        tokio::time::sleep(self.delay).await;

        if let Some(reason) = &self.failure {
            return Err(SubmissionError::Transport(reason.clone()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.received
            .lock()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?
            .push(draft.clone());
        Ok(SubmissionReceipt::accepted(Some(id)))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
