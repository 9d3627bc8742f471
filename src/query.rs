//! Listing query: search, category and price-bucket filtering.
//!
//! The query is a stable filter over the catalog. It never reorders,
//! duplicates or fabricates records; callers get borrowed records back in
//! catalog order.

use crate::domain::{CategoryId, ENTERPRISE_MIN, ENTRY_MAX, PriceFilter, PricingModel, ToolRecord};

/// Filter criteria for the listing view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolQuery {
    /// Free-text search, matched case-insensitively against name and pitch
    pub search: String,
    /// Exact category match when set
    pub category: Option<CategoryId>,
    /// Price bucket
    pub price: PriceFilter,
}

impl ToolQuery {
    /// True when no criterion narrows the catalog.
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty() && self.category.is_none() && self.price == PriceFilter::All
    }

    /// Check if a record passes all three criteria.
    pub fn matches(&self, tool: &ToolRecord) -> bool {
        matches_search(tool, &self.search)
            && matches_category(tool, self.category.as_ref())
            && matches_price(tool, self.price)
    }

    /// Apply the query to a catalog, preserving catalog order.
    pub fn apply<'a>(&self, catalog: &'a [ToolRecord]) -> Vec<&'a ToolRecord> {
        if self.is_neutral() {
            return catalog.iter().collect();
        }
        catalog.iter().filter(|tool| self.matches(tool)).collect()
    }
}

/// Records visible under the given filters, in catalog order.
pub fn visible_tools<'a>(
    catalog: &'a [ToolRecord],
    search_query: &str,
    active_category: Option<&CategoryId>,
    price_filter: PriceFilter,
) -> Vec<&'a ToolRecord> {
    let query = ToolQuery {
        search: search_query.to_string(),
        category: active_category.cloned(),
        price: price_filter,
    };
    query.apply(catalog)
}

/// Case-insensitive substring match on name or short pitch.
pub fn matches_search(tool: &ToolRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    tool.name.to_lowercase().contains(&needle) || tool.short_pitch.to_lowercase().contains(&needle)
}

pub fn matches_category(tool: &ToolRecord, category: Option<&CategoryId>) -> bool {
    match category {
        Some(id) => &tool.category == id,
        None => true,
    }
}

/// Price bucket membership. A Paid record without a price matches only `All`.
pub fn matches_price(tool: &ToolRecord, filter: PriceFilter) -> bool {
    let price = tool.bucket_price();
    match filter {
        PriceFilter::All => true,
        PriceFilter::Free => tool.pricing_model.is_free_tier(),
        PriceFilter::Entry => price > 0.0 && price <= ENTRY_MAX,
        PriceFilter::Pro => price > ENTRY_MAX && price < ENTERPRISE_MIN,
        PriceFilter::Enterprise => price >= ENTERPRISE_MIN || tool.pricing_model == PricingModel::Custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OfferingType;

    fn tool(id: u64, name: &str, category: &str, model: PricingModel, price: Option<f64>) -> ToolRecord {
        ToolRecord {
            id,
            name: name.to_string(),
            category: CategoryId::new(category),
            offering_type: OfferingType::SaaS,
            short_pitch: format!("{} pitch", name),
            description: String::new(),
            features: vec![],
            integrations: vec![],
            pricing_model: model,
            pricing_starting_at: String::new(),
            price_numeric: price,
            location: String::new(),
            logo_url: String::new(),
            cover_url: String::new(),
            website_url: String::new(),
            contact_email: String::new(),
        }
    }

    fn scenario_catalog() -> Vec<ToolRecord> {
        vec![
            tool(1, "GrowthMetrics AI", "analytics", PricingModel::Paid, Some(299.0)),
            tool(2, "ContentFlow Pro", "seo", PricingModel::Freemium, Some(0.0)),
        ]
    }

    fn ids(tools: &[&ToolRecord]) -> Vec<u64> {
        tools.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_neutral_filters_return_whole_catalog() {
        let catalog = scenario_catalog();
        let visible = visible_tools(&catalog, "", None, PriceFilter::All);
        assert_eq!(ids(&visible), vec![1, 2]);
        assert!(ToolQuery::default().is_neutral());
    }

    #[test]
    fn test_scenario_seo_free() {
        let catalog = scenario_catalog();
        let seo = CategoryId::new("seo");
        let visible = visible_tools(&catalog, "", Some(&seo), PriceFilter::Free);
        assert_eq!(ids(&visible), vec![2]);
        assert_eq!(visible[0].name, "ContentFlow Pro");
    }

    #[test]
    fn test_search_case_insensitive() {
        let catalog = vec![tool(1, "Acme", "seo", PricingModel::Paid, Some(10.0))];
        assert_eq!(visible_tools(&catalog, "acme", None, PriceFilter::All).len(), 1);
        assert_eq!(visible_tools(&catalog, "ACME", None, PriceFilter::All).len(), 1);
        assert_eq!(visible_tools(&catalog, "zeta", None, PriceFilter::All).len(), 0);
    }

    #[test]
    fn test_search_matches_pitch() {
        let mut t = tool(1, "Acme", "seo", PricingModel::Paid, None);
        t.short_pitch = "Editorial calendar for teams".to_string();
        assert!(matches_search(&t, "CALENDAR"));
        assert!(!matches_search(&t, "crm"));
    }

    #[test]
    fn test_category_exact_match_only() {
        let t = tool(1, "Acme", "seo", PricingModel::Paid, None);
        assert!(!matches_category(&t, Some(&CategoryId::new("ai"))));
        assert!(!matches_category(&t, Some(&CategoryId::new("se"))));
        assert!(matches_category(&t, Some(&CategoryId::new("seo"))));
        assert!(matches_category(&t, None));
    }

    #[test]
    fn test_price_boundary_99() {
        let t = tool(1, "A", "seo", PricingModel::Paid, Some(99.0));
        assert!(matches_price(&t, PriceFilter::Entry));
        assert!(!matches_price(&t, PriceFilter::Pro));
    }

    #[test]
    fn test_fractional_price_above_99_is_pro() {
        let t = tool(1, "A", "seo", PricingModel::Paid, Some(99.5));
        assert!(matches_price(&t, PriceFilter::Pro));
        assert!(!matches_price(&t, PriceFilter::Entry));
    }

    #[test]
    fn test_price_boundary_500() {
        let t = tool(1, "A", "seo", PricingModel::Paid, Some(500.0));
        assert!(matches_price(&t, PriceFilter::Enterprise));
        assert!(!matches_price(&t, PriceFilter::Pro));
    }

    #[test]
    fn test_custom_pricing_is_enterprise() {
        let t = tool(1, "A", "crm", PricingModel::Custom, Some(10.0));
        assert!(matches_price(&t, PriceFilter::Enterprise));
        assert!(matches_price(&t, PriceFilter::Entry));
    }

    #[test]
    fn test_paid_without_price_matches_only_all() {
        let t = tool(1, "A", "seo", PricingModel::Paid, None);
        for filter in PriceFilter::ALL {
            assert_eq!(matches_price(&t, filter), filter == PriceFilter::All, "{filter}");
        }
    }

    #[test]
    fn test_free_bucket_ignores_price() {
        let t = tool(1, "A", "seo", PricingModel::Free, Some(50.0));
        assert!(matches_price(&t, PriceFilter::Free));
        assert!(matches_price(&t, PriceFilter::Entry));
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = vec![
            tool(5, "Alpha", "seo", PricingModel::Paid, Some(50.0)),
            tool(3, "Beta", "crm", PricingModel::Paid, Some(150.0)),
            tool(9, "Alphabet", "seo", PricingModel::Paid, Some(60.0)),
            tool(1, "Gamma", "seo", PricingModel::Paid, Some(70.0)),
        ];
        let visible = visible_tools(&catalog, "alpha", None, PriceFilter::Entry);
        assert_eq!(ids(&visible), vec![5, 9]);
        assert!(visible.iter().all(|v| catalog.iter().any(|c| std::ptr::eq(c, *v))));
    }

    #[test]
    fn test_free_function_agrees_with_query() {
        let catalog = scenario_catalog();
        let analytics = CategoryId::new("analytics");
        let cases = [
            ("", None, PriceFilter::All),
            ("flow", None, PriceFilter::All),
            ("", Some(&analytics), PriceFilter::Pro),
            ("GROWTH", Some(&analytics), PriceFilter::Entry),
            ("", None, PriceFilter::Free),
        ];
        for (search, category, price) in cases {
            let query = ToolQuery {
                search: search.to_string(),
                category: category.cloned(),
                price,
            };
            assert_eq!(
                ids(&visible_tools(&catalog, search, category, price)),
                ids(&query.apply(&catalog)),
                "search {:?} category {:?} price {}",
                search,
                category,
                price
            );
        }
    }

    #[test]
    fn test_narrowing_query_is_not_neutral() {
        let query = ToolQuery {
            category: Some(CategoryId::new("analytics")),
            price: PriceFilter::Pro,
            ..ToolQuery::default()
        };
        assert!(!query.is_neutral());
        assert_eq!(ids(&query.apply(&scenario_catalog())), vec![1]);
    }
}
