//! View-state controller
//!
//! `ViewController` owns the loaded catalog, the navigation/filter state and
//! the status of the two asynchronous operations (catalog load, submission).
//! The renderer holds the controller, reads state from it and forwards user
//! actions into it. No operation here panics or returns a hard failure for
//! navigation; collaborator failures surface as load/submission outcomes.

pub mod state;

pub use state::{LoadState, SubmissionStatus, UiEffect, View, ViewState};

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogStore};
use crate::domain::{CategoryId, CategorySet, PriceFilter, ToolRecord};
use crate::submission::{SubmissionError, SubmissionGateway, SubmissionReceipt, ToolDraft};

/// Drives navigation, filtering and submission for one session.
pub struct ViewController {
    store: Arc<dyn CatalogStore>,
    gateway: Arc<dyn SubmissionGateway>,
    categories: CategorySet,
    catalog: Catalog,
    state: ViewState,
    load_state: LoadState,
    submission: SubmissionStatus,
    effects: Vec<UiEffect>,
}

impl std::fmt::Debug for ViewController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewController")
            .field("store", &self.store.describe())
            .field("gateway", &self.gateway.describe())
            .field("tools", &self.catalog.len())
            .field("state", &self.state)
            .field("load_state", &self.load_state)
            .finish_non_exhaustive()
    }
}

impl ViewController {
    /// Create a controller in its initial state: Home, no selection, no filters.
    pub fn new(store: Arc<dyn CatalogStore>, gateway: Arc<dyn SubmissionGateway>, categories: CategorySet) -> Self {
        Self {
            store,
            gateway,
            categories,
            catalog: Catalog::empty(),
            state: ViewState::new(),
            load_state: LoadState::NotStarted,
            submission: SubmissionStatus::Idle,
            effects: Vec::new(),
        }
    }

    //=== Lifecycle ===

    /// Load the catalog. Runs once per session; later calls are ignored.
    ///
    /// A failed load leaves the catalog empty and the controller out of the
    /// loading state.
    pub async fn initialize(&mut self) {
        if self.load_state != LoadState::NotStarted {
            log::warn!("Catalog already initialized ({:?}), skipping reload", self.load_state);
            return;
        }

        self.load_state = LoadState::Loading;
        log::info!("Loading catalog from {}", self.store.describe());

        match self.store.load_all().await {
            Ok(records) => {
                self.catalog = Catalog::new(records);
                self.load_state = LoadState::Loaded;
                log::info!("Catalog loaded: {} tools", self.catalog.len());
            }
            Err(e) => {
                log::warn!("Catalog load failed: {}", e);
                self.catalog = Catalog::empty();
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    /// Reason the catalog failed to load, if it did
    pub fn load_error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    //=== Read access ===

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_view(&self) -> View {
        self.state.current_view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Resolve the selected id against the current catalog.
    pub fn selected_tool(&self) -> Option<&ToolRecord> {
        self.state.selected_tool_id.and_then(|id| self.catalog.get(id))
    }

    /// The tool to render on the profile screen, if any.
    ///
    /// `None` when not on the profile screen or when the selection does not
    /// resolve; an unknown id is not an error.
    pub fn profile(&self) -> Option<&ToolRecord> {
        if self.state.current_view != View::Profile {
            return None;
        }
        self.selected_tool()
    }

    /// Tools matching the current filters, in catalog order.
    pub fn visible_tools(&self) -> Vec<&ToolRecord> {
        self.state.query().apply(self.catalog.tools())
    }

    /// Drain side effects queued since the last call.
    pub fn take_effects(&mut self) -> Vec<UiEffect> {
        std::mem::take(&mut self.effects)
    }

    //=== Transitions ===

    /// Switch screens, optionally selecting a tool.
    pub fn navigate(&mut self, target: View, tool_id: Option<u64>) {
        log::debug!("navigate: {:?} -> {:?} (tool {:?})", self.state.current_view, target, tool_id);
        self.state.current_view = target;
        if let Some(id) = tool_id {
            self.state.selected_tool_id = Some(id);
        }
        self.effects.push(UiEffect::ScrollToTop);
    }

    /// Open a tool's profile.
    pub fn open_tool(&mut self, id: u64) {
        self.navigate(View::Profile, Some(id));
    }

    /// Enter a search from anywhere; always lands on the listing.
    pub fn search(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.current_view = View::Listing;
    }

    /// Pick a category from anywhere; always lands on the listing.
    pub fn select_category(&mut self, id: impl Into<CategoryId>) {
        let id = id.into();
        self.warn_unknown_category(&id);
        self.state.active_category = Some(id);
        self.state.current_view = View::Listing;
    }

    //=== Filter mutations (no view change) ===

    pub fn set_active_category(&mut self, id: Option<CategoryId>) {
        if let Some(id) = &id {
            self.warn_unknown_category(id);
        }
        self.state.active_category = id;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    pub fn set_active_price_filter(&mut self, filter: PriceFilter) {
        self.state.active_price_filter = filter;
    }

    fn warn_unknown_category(&self, id: &CategoryId) {
        if !self.categories.contains(id) {
            log::warn!("Category {} is not in the category set; listing will be empty", id);
        }
    }

    //=== Submission ===

    pub fn submission_status(&self) -> &SubmissionStatus {
        &self.submission
    }

    /// Clear the last submission outcome (e.g. when the form is reopened).
    pub fn reset_submission(&mut self) {
        self.submission = SubmissionStatus::Idle;
    }

    /// Validate a draft and forward it to the gateway.
    ///
    /// Missing required fields fail locally without contacting the gateway.
    /// The draft is borrowed so the caller can resubmit it unchanged after a
    /// failure. Accepted submissions are not added to the local catalog.
    pub async fn submit(&mut self, draft: &ToolDraft) -> Result<SubmissionReceipt, SubmissionError> {
        if let Err(e) = draft.validate() {
            log::info!("Submission blocked locally: {}", e);
            self.submission = SubmissionStatus::Rejected { reason: e.to_string() };
            return Err(e);
        }

        self.submission = SubmissionStatus::Submitting;
        let result = match self.gateway.submit(draft).await {
            Ok(receipt) if receipt.accepted => Ok(receipt),
            Ok(_) => Err(SubmissionError::Rejected("the directory declined the listing".to_string())),
            Err(e) => Err(e),
        };

        self.submission = match &result {
            Ok(receipt) => {
                log::info!("Submission accepted: {} (id {:?})", draft.name, receipt.assigned_id);
                SubmissionStatus::Accepted {
                    assigned_id: receipt.assigned_id,
                }
            }
            Err(e) => {
                log::warn!("Submission failed: {}", e);
                SubmissionStatus::Rejected { reason: e.to_string() }
            }
        };
        result
    }
}
