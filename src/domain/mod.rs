//! Domain types for martech-hub
//!
//! This module contains the core catalog types:
//! - ToolRecord: a vendor listing with pricing and display fields
//! - Category / CategorySet: the closed set of listing categories
//! - PriceFilter: named price buckets used by the listing filter

pub mod category;
pub mod price;
pub mod tool;

pub use category::{Category, CategoryId, CategorySet, default_categories};
pub use price::{ENTERPRISE_MIN, ENTRY_MAX, PriceFilter};
pub use tool::{OfferingType, PricingModel, ToolRecord};
