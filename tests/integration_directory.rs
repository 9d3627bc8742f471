//! Directory browsing integration tests
//!
//! Drives a `ViewController` end to end over mock and file-backed catalogs.

use std::sync::Arc;
use std::time::Duration;

use martech_hub::catalog::{CatalogStore, FileCatalogStore, MockCatalogStore, seed_tools};
use martech_hub::config::HubConfig;
use martech_hub::controller::{LoadState, SubmissionStatus, UiEffect, View, ViewController};
use martech_hub::domain::{CategoryId, CategorySet, PriceFilter};
use martech_hub::submission::{MockSubmissionGateway, SubmissionError, ToolDraft};
use tempfile::TempDir;

fn instant_controller(store: Arc<dyn CatalogStore>) -> ViewController {
    ViewController::new(
        store,
        Arc::new(MockSubmissionGateway::new().with_delay(Duration::ZERO)),
        CategorySet::default(),
    )
}

fn names(controller: &ViewController) -> Vec<String> {
    controller.visible_tools().iter().map(|t| t.name.clone()).collect()
}

fn complete_draft() -> ToolDraft {
    ToolDraft {
        name: "LeadForge".to_string(),
        category: "crm".to_string(),
        short_pitch: "Pipeline hygiene on autopilot.".to_string(),
        description: "Deduplicates and enriches leads.".to_string(),
        pricing_model: "Paid".to_string(),
        pricing_starting_at: "$59/mo".to_string(),
        contact_email: "team@leadforge.test".to_string(),
        ..ToolDraft::default()
    }
}

/// Integration test: search then category then price narrows the listing
#[tokio::test]
async fn test_browse_and_filter_flow() {
    let mut controller = instant_controller(Arc::new(MockCatalogStore::seeded().without_delay()));
    controller.initialize().await;
    assert_eq!(controller.load_state(), &LoadState::Loaded);
    assert_eq!(controller.current_view(), View::Home);

    controller.search("pro");
    assert_eq!(controller.current_view(), View::Listing);
    assert_eq!(names(&controller), vec!["ContentFlow Pro"]);

    controller.set_search_query("");
    controller.set_active_price_filter(PriceFilter::Entry);
    assert_eq!(names(&controller), vec!["SocialPulse"]);

    controller.set_active_category(Some(CategoryId::new("seo")));
    assert!(controller.visible_tools().is_empty());

    controller.set_active_price_filter(PriceFilter::Free);
    assert_eq!(names(&controller), vec!["ContentFlow Pro"]);

    controller.set_active_category(None);
    controller.set_active_price_filter(PriceFilter::Enterprise);
    assert_eq!(names(&controller), vec!["OmniConnect CRM"]);
    assert_eq!(controller.current_view(), View::Listing);
}

/// Integration test: opening a profile keeps filters and queues scroll-to-top
#[tokio::test]
async fn test_profile_navigation_keeps_filters() {
    let mut controller = instant_controller(Arc::new(MockCatalogStore::seeded().without_delay()));
    controller.initialize().await;
    controller.select_category(CategoryId::new("crm"));
    controller.take_effects();

    controller.open_tool(3);
    assert_eq!(controller.profile().map(|t| t.name.as_str()), Some("OmniConnect CRM"));
    assert_eq!(controller.take_effects(), vec![UiEffect::ScrollToTop]);
    assert!(controller.take_effects().is_empty());

    controller.navigate(View::Listing, None);
    assert_eq!(controller.state().active_category, Some(CategoryId::new("crm")));
    assert_eq!(names(&controller), vec!["OmniConnect CRM"]);
}

/// Integration test: a failing store settles into an empty, usable directory
#[tokio::test]
async fn test_failed_load_leaves_empty_directory() {
    let mut controller = instant_controller(Arc::new(MockCatalogStore::failing("backend offline").without_delay()));
    controller.initialize().await;

    assert!(!controller.is_loading());
    assert!(controller.load_error().is_some_and(|r| r.contains("backend offline")));
    assert!(controller.catalog().is_empty());

    controller.open_tool(1);
    assert_eq!(controller.current_view(), View::Profile);
    assert!(controller.profile().is_none());
}

/// Integration test: a JSON catalog file drives the same filters
#[tokio::test]
async fn test_file_catalog_end_to_end() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tools.json");
    let mut tools = seed_tools();
    let mut duplicate = tools[0].clone();
    duplicate.name = "Shadowed Duplicate".to_string();
    tools.push(duplicate);
    std::fs::write(&path, serde_json::to_string(&tools).unwrap()).unwrap();

    let mut controller = instant_controller(Arc::new(FileCatalogStore::new(&path)));
    controller.initialize().await;

    assert_eq!(controller.catalog().len(), 4);
    assert_eq!(controller.catalog().get(1).map(|t| t.name.as_str()), Some("GrowthMetrics AI"));

    controller.navigate(View::Listing, None);
    controller.set_active_price_filter(PriceFilter::Free);
    assert_eq!(names(&controller), vec!["ContentFlow Pro"]);
}

/// Integration test: incomplete drafts never reach the gateway
#[tokio::test]
async fn test_submission_validation_and_acceptance() {
    let gateway = Arc::new(MockSubmissionGateway::new().with_delay(Duration::ZERO).with_first_id(7000));
    let mut controller = ViewController::new(
        Arc::new(MockCatalogStore::seeded().without_delay()),
        gateway.clone(),
        CategorySet::default(),
    );
    controller.initialize().await;
    controller.navigate(View::Submit, None);

    let mut draft = complete_draft();
    draft.contact_email = "   ".to_string();
    let err = controller.submit(&draft).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Invalid { .. }));
    assert_eq!(gateway.calls(), 0);
    assert!(matches!(controller.submission_status(), SubmissionStatus::Rejected { .. }));

    draft.contact_email = "team@leadforge.test".to_string();
    let receipt = controller.submit(&draft).await.unwrap();
    assert!(receipt.accepted);
    assert_eq!(receipt.assigned_id, Some(7000));
    assert_eq!(gateway.calls(), 1);
    assert_eq!(gateway.received()[0].name, "LeadForge");

    // Accepted tools are not added to the local catalog
    assert_eq!(controller.catalog().len(), 4);
}

/// Integration test: default config builds working mock collaborators
#[tokio::test]
async fn test_config_builds_controller() {
    let config = HubConfig::from_yaml("mock:\n  load-delay-ms: 0\n  submit-delay-ms: 0\n").unwrap();
    let mut controller = ViewController::new(
        config.build_store().unwrap(),
        config.build_gateway().unwrap(),
        config.category_set(),
    );
    controller.initialize().await;
    assert_eq!(controller.catalog().len(), 4);
    assert_eq!(controller.categories().len(), 6);

    controller.navigate(View::Submit, None);
    assert!(controller.submit(&complete_draft()).await.is_ok());
    assert!(controller.submission_status().is_accepted());
}
