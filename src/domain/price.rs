//! Price buckets used by the listing filter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HubError;

/// Upper bound (inclusive) of the Entry bucket
pub const ENTRY_MAX: f64 = 99.0;

/// Lower bound (inclusive) of the Enterprise bucket
pub const ENTERPRISE_MIN: f64 = 500.0;

/// Named price classification selected in the listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceFilter {
    #[default]
    All,
    /// Free or Freemium pricing model
    Free,
    /// 0 < price <= 99
    Entry,
    /// 99 < price < 500
    Pro,
    /// price >= 500, or Custom pricing at any price
    Enterprise,
}

impl PriceFilter {
    /// Every filter in display order
    pub const ALL: [PriceFilter; 5] = [
        PriceFilter::All,
        PriceFilter::Free,
        PriceFilter::Entry,
        PriceFilter::Pro,
        PriceFilter::Enterprise,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Free => "free",
            Self::Entry => "entry",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Label for filter chips
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Any Price",
            Self::Free => "Free / Freemium",
            Self::Entry => "Up to $99/mo",
            Self::Pro => "Over $99 to $499/mo",
            Self::Enterprise => "$500+/mo or Custom",
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriceFilter {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lowered)
            .ok_or_else(|| HubError::UnknownPriceFilter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(PriceFilter::default(), PriceFilter::All);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Entry".parse::<PriceFilter>().unwrap(), PriceFilter::Entry);
        assert_eq!(" PRO ".parse::<PriceFilter>().unwrap(), PriceFilter::Pro);
        assert_eq!("enterprise".parse::<PriceFilter>().unwrap(), PriceFilter::Enterprise);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "cheap".parse::<PriceFilter>().unwrap_err();
        assert!(matches!(err, HubError::UnknownPriceFilter(ref s) if s == "cheap"));
    }

    #[test]
    fn test_name_roundtrips_through_parse() {
        for filter in PriceFilter::ALL {
            assert_eq!(filter.name().parse::<PriceFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_labels_name_bucket_edges() {
        assert_eq!(PriceFilter::Entry.label(), "Up to $99/mo");
        assert_eq!(PriceFilter::Pro.label(), "Over $99 to $499/mo");
        assert_eq!(PriceFilter::Enterprise.label(), "$500+/mo or Custom");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&PriceFilter::Pro).unwrap(), "\"pro\"");
    }
}
