//! Tool record and related types
//!
//! A `ToolRecord` is one vendor listing in the catalog. Field names on the
//! wire follow the catalog API (`short_pitch`, `software_description`, `type`,
//! ...), so records round-trip through JSON and YAML unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryId;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    //=== Identity ===
    /// Unique identifier assigned by the catalog backend
    pub id: u64,

    /// Product name
    pub name: String,

    /// Category id from the closed category set
    pub category: CategoryId,

    /// How the product is offered
    #[serde(rename = "type")]
    pub offering_type: OfferingType,

    //=== Copy ===
    /// One-line value proposition
    pub short_pitch: String,

    /// Long-form description
    #[serde(rename = "software_description")]
    pub description: String,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub integrations: Vec<String>,

    //=== Pricing ===
    pub pricing_model: PricingModel,

    /// Display string such as "$299/mo" or "Contact Sales"
    pub pricing_starting_at: String,

    /// Normalized monthly price used for bucketing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_numeric: Option<f64>,

    //=== Display ===
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub contact_email: String,
}

impl ToolRecord {
    /// Monthly price used for bucketing; absent prices count as zero
    pub fn bucket_price(&self) -> f64 {
        self.price_numeric.unwrap_or(0.0)
    }

    /// Integrations shown on a listing card, plus how many were left out
    pub fn integration_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.integrations.len().min(limit);
        (&self.integrations[..shown], self.integrations.len() - shown)
    }
}

/// How a product is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferingType {
    #[serde(rename = "SaaS")]
    SaaS,
    #[serde(rename = "Open Source")]
    OpenSource,
    #[serde(rename = "Agency Service")]
    AgencyService,
    #[serde(rename = "Enterprise")]
    Enterprise,
}

impl OfferingType {
    /// Get the display name
    pub fn label(self) -> &'static str {
        match self {
            Self::SaaS => "SaaS",
            Self::OpenSource => "Open Source",
            Self::AgencyService => "Agency Service",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for OfferingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Commercial model of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingModel {
    Free,
    Freemium,
    Paid,
    Custom,
}

impl PricingModel {
    /// Returns true for models with a no-cost entry point
    pub fn is_free_tier(self) -> bool {
        matches!(self, PricingModel::Free | PricingModel::Freemium)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ToolRecord {
        ToolRecord {
            id: 4,
            name: "SocialPulse".to_string(),
            category: CategoryId::new("social"),
            offering_type: OfferingType::SaaS,
            short_pitch: "Listen to the internet in real-time.".to_string(),
            description: "Sentiment analysis across digital sources.".to_string(),
            features: vec!["Sentiment Analysis".to_string()],
            integrations: vec![
                "Twitter API".to_string(),
                "Reddit".to_string(),
                "Instagram Business".to_string(),
                "Discord".to_string(),
            ],
            pricing_model: PricingModel::Paid,
            pricing_starting_at: "$99/mo".to_string(),
            price_numeric: Some(99.0),
            location: "New York, NY".to_string(),
            logo_url: String::new(),
            cover_url: String::new(),
            website_url: "https://example.com".to_string(),
            contact_email: "support@socialpulse.com".to_string(),
        }
    }

    #[test]
    fn test_bucket_price_defaults_to_zero() {
        let mut tool = sample();
        assert_eq!(tool.bucket_price(), 99.0);

        tool.price_numeric = None;
        assert_eq!(tool.bucket_price(), 0.0);
    }

    #[test]
    fn test_integration_preview() {
        let tool = sample();
        let (shown, hidden) = tool.integration_preview(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[0], "Twitter API");
        assert_eq!(hidden, 1);

        let (shown, hidden) = tool.integration_preview(10);
        assert_eq!(shown.len(), 4);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "SaaS");
        assert_eq!(json["software_description"], "Sentiment analysis across digital sources.");
        assert_eq!(json["pricing_starting_at"], "$99/mo");
        assert_eq!(json["category"], "social");
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{
            "id": 9,
            "name": "Plausible",
            "category": "analytics",
            "type": "Open Source",
            "short_pitch": "Privacy-first analytics.",
            "software_description": "Lightweight analytics.",
            "pricing_model": "Free",
            "pricing_starting_at": "$0"
        }"#;
        let tool: ToolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(tool.offering_type, OfferingType::OpenSource);
        assert!(tool.features.is_empty());
        assert_eq!(tool.price_numeric, None);
        assert_eq!(tool.location, "");
    }

    #[test]
    fn test_free_tier_models() {
        assert!(PricingModel::Free.is_free_tier());
        assert!(PricingModel::Freemium.is_free_tier());
        assert!(!PricingModel::Paid.is_free_tier());
        assert!(!PricingModel::Custom.is_free_tier());
    }

    #[test]
    fn test_offering_type_display() {
        assert_eq!(OfferingType::AgencyService.to_string(), "Agency Service");
        assert_eq!(PricingModel::Custom.to_string(), "Custom");
    }
}
