//! Tool submission drafts and local pre-flight validation

use serde::{Deserialize, Serialize};
use std::fmt;

use super::gateway::SubmissionError;
use crate::domain::OfferingType;

/// A user-entered tool listing awaiting gateway acceptance.
///
/// Fields are raw form input. The gateway receives the draft serialized with
/// the catalog's wire names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolDraft {
    pub name: String,
    pub category: String,
    pub short_pitch: String,
    #[serde(rename = "software_description")]
    pub description: String,
    pub pricing_model: String,
    pub pricing_starting_at: String,
    pub contact_email: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub integrations: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub website_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cover_url: String,
}

/// Fields a draft must carry before it is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Category,
    ShortPitch,
    Description,
    PricingModel,
    PricingStartingAt,
    ContactEmail,
}

impl DraftField {
    /// Required fields in form order
    pub const REQUIRED: [DraftField; 7] = [
        DraftField::Name,
        DraftField::Category,
        DraftField::ShortPitch,
        DraftField::Description,
        DraftField::PricingModel,
        DraftField::PricingStartingAt,
        DraftField::ContactEmail,
    ];

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Software Name",
            Self::Category => "Category",
            Self::ShortPitch => "Short Pitch",
            Self::Description => "Description",
            Self::PricingModel => "Pricing Model",
            Self::PricingStartingAt => "Starting Price",
            Self::ContactEmail => "Contact Email",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ToolDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a required field
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::ShortPitch => &self.short_pitch,
            DraftField::Description => &self.description,
            DraftField::PricingModel => &self.pricing_model,
            DraftField::PricingStartingAt => &self.pricing_starting_at,
            DraftField::ContactEmail => &self.contact_email,
        }
    }

    /// Required fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::REQUIRED
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    /// Presence check only; formats (email, URL) are not inspected.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmissionError::Invalid { missing })
        }
    }
}
