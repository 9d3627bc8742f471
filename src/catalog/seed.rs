//! Built-in listings served by the mock catalog

use crate::domain::{CategoryId, OfferingType, PricingModel, ToolRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The directory's starter listings.
pub fn seed_tools() -> Vec<ToolRecord> {
    vec![
        ToolRecord {
            id: 1,
            name: "GrowthMetrics AI".to_string(),
            category: CategoryId::new("analytics"),
            offering_type: OfferingType::SaaS,
            short_pitch: "Predictive analytics for modern SaaS teams.".to_string(),
            description: "GrowthMetrics AI leverages advanced neural networks to predict customer churn \
                          before it happens. It integrates directly with your payment processor to provide \
                          real-time revenue health scores and automated intervention workflows."
                .to_string(),
            features: strings(&[
                "Real-time Churn Prediction",
                "Revenue Forecasting",
                "Automated Cohort Analysis",
                "Custom Event Tracking",
            ]),
            integrations: strings(&["Stripe", "HubSpot", "Salesforce", "Slack"]),
            pricing_model: PricingModel::Paid,
            pricing_starting_at: "$299/mo".to_string(),
            price_numeric: Some(299.0),
            location: "San Francisco, CA".to_string(),
            logo_url: "https://picsum.photos/seed/tool1/200/200".to_string(),
            cover_url: "https://picsum.photos/seed/cover1/1200/400".to_string(),
            website_url: "https://example.com".to_string(),
            contact_email: "sales@growthmetrics.ai".to_string(),
        },
        ToolRecord {
            id: 2,
            name: "ContentFlow Pro".to_string(),
            category: CategoryId::new("seo"),
            offering_type: OfferingType::SaaS,
            short_pitch: "The ultimate editorial calendar for high-velocity teams.".to_string(),
            description: "Manage thousands of content pieces with ease. ContentFlow Pro provides a visual \
                          representation of your entire content strategy, from ideation to distribution."
                .to_string(),
            features: strings(&[
                "Visual Workflow Builder",
                "AI Content Optimization",
                "Multi-channel Scheduling",
                "Semantic SEO Audit",
            ]),
            integrations: strings(&["WordPress", "Webflow", "Ghost", "Medium"]),
            pricing_model: PricingModel::Freemium,
            pricing_starting_at: "$0".to_string(),
            price_numeric: Some(0.0),
            location: "London, UK".to_string(),
            logo_url: "https://picsum.photos/seed/tool2/200/200".to_string(),
            cover_url: "https://picsum.photos/seed/cover2/1200/400".to_string(),
            website_url: "https://example.com".to_string(),
            contact_email: "hello@contentflow.io".to_string(),
        },
        ToolRecord {
            id: 3,
            name: "OmniConnect CRM".to_string(),
            category: CategoryId::new("crm"),
            offering_type: OfferingType::Enterprise,
            short_pitch: "Unified customer data platform for omnichannel sales.".to_string(),
            description: "OmniConnect breaks down silos between departments by providing a single source of \
                          truth for every customer interaction across web, mobile, and offline channels."
                .to_string(),
            features: strings(&[
                "360-degree Customer View",
                "Automated Lead Scoring",
                "Dynamic Segment Creation",
                "Enterprise API Access",
            ]),
            integrations: strings(&["Shopify", "Zendesk", "Magento", "Twilio"]),
            pricing_model: PricingModel::Custom,
            pricing_starting_at: "Contact Sales".to_string(),
            price_numeric: None,
            location: "Berlin, DE".to_string(),
            logo_url: "https://picsum.photos/seed/tool3/200/200".to_string(),
            cover_url: "https://picsum.photos/seed/cover3/1200/400".to_string(),
            website_url: "https://example.com".to_string(),
            contact_email: "enterprise@omniconnect.com".to_string(),
        },
        ToolRecord {
            id: 4,
            name: "SocialPulse".to_string(),
            category: CategoryId::new("social"),
            offering_type: OfferingType::SaaS,
            short_pitch: "Listen to the internet in real-time.".to_string(),
            description: "SocialPulse uses sentiment analysis to monitor brand mentions across millions of \
                          digital sources, allowing marketing teams to react instantly to trends and crises."
                .to_string(),
            features: strings(&[
                "Sentiment Analysis",
                "Real-time Alerting",
                "Influencer Identification",
                "Competitor Benchmarking",
            ]),
            integrations: strings(&["Twitter API", "Reddit", "Instagram Business", "Discord"]),
            pricing_model: PricingModel::Paid,
            pricing_starting_at: "$99/mo".to_string(),
            price_numeric: Some(99.0),
            location: "New York, NY".to_string(),
            logo_url: "https://picsum.photos/seed/tool4/200/200".to_string(),
            cover_url: "https://picsum.photos/seed/cover4/1200/400".to_string(),
            website_url: "https://example.com".to_string(),
            contact_email: "support@socialpulse.com".to_string(),
        },
    ]
}
