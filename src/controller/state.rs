//! View state for the directory.
//!
//! This module defines the state types the controller owns and the renderer
//! reads:
//! - `View`: which screen is active
//! - `ViewState`: current screen, selection and filter criteria
//! - `UiEffect`: side effects queued for the renderer
//! - `LoadState` / `SubmissionStatus`: progress of the two async operations

use crate::domain::{CategoryId, PriceFilter};
use crate::query::ToolQuery;

/// Which screen is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing screen with search box and category tiles
    #[default]
    Home,
    /// Filterable tool listing
    Listing,
    /// Single tool profile
    Profile,
    /// Tool submission form
    Submit,
}

impl View {
    /// Get the view name for display
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Listing => "Tools",
            Self::Profile => "Profile",
            Self::Submit => "Submit Tool",
        }
    }
}

/// Navigation and filter state.
///
/// `selected_tool_id` is an id, never a record: it is resolved against the
/// catalog on every read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub current_view: View,
    pub selected_tool_id: Option<u64>,
    pub search_query: String,
    pub active_category: Option<CategoryId>,
    pub active_price_filter: PriceFilter,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current filters as a query
    pub fn query(&self) -> ToolQuery {
        ToolQuery {
            search: self.search_query.clone(),
            category: self.active_category.clone(),
            price: self.active_price_filter,
        }
    }
}

/// Side effects requested by a transition, drained by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    ScrollToTop,
}

/// Progress of the one-shot catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    /// Load failed; the catalog was left empty
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Progress of the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Accepted { assigned_id: Option<u64> },
    Rejected { reason: String },
}

impl SubmissionStatus {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionStatus::Accepted { .. })
    }
}
