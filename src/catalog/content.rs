// src/catalog/content.rs - Static page copy: option lists, tables and agent detail panels

use crate::model::AgentType;

/// A selectable card in the onboarding wizard or landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const ONBOARDING_STEP_TITLES: [&str; 5] =
    ["Business Info", "Connect Store", "Platforms", "Goals", "Meet Team"];

pub const INDUSTRIES: [&str; 9] = [
    "Fashion & Apparel",
    "Electronics",
    "Beauty & Cosmetics",
    "Home & Garden",
    "Food & Beverage",
    "Health & Wellness",
    "Sports & Outdoors",
    "Toys & Games",
    "Other",
];

pub const REVENUE_RANGES: [&str; 6] = [
    "$0 - $10K",
    "$10K - $50K",
    "$50K - $100K",
    "$100K - $500K",
    "$500K - $1M",
    "$1M+",
];

pub const GOALS: [Choice; 4] = [
    Choice { id: "sales", title: "Increase Sales", description: "Drive more conversions and revenue", icon: "💰" },
    Choice { id: "leads", title: "Generate Leads", description: "Capture and nurture potential customers", icon: "👥" },
    Choice { id: "traffic", title: "Boost Traffic", description: "Get more visitors to your store", icon: "🌍" },
    Choice { id: "brand", title: "Brand Awareness", description: "Build recognition and trust", icon: "✨" },
];

pub const STORE_PLATFORMS: [Choice; 2] = [
    Choice { id: "shopify", title: "Shopify", description: "Connect your Shopify store", icon: "🛍️" },
    Choice { id: "woocommerce", title: "WooCommerce", description: "Connect your WordPress store", icon: "🏪" },
];

pub const CONNECT_PLATFORMS: [Choice; 4] = [
    Choice { id: "meta", title: "Meta Ads", description: "Facebook & Instagram advertising", icon: "📱" },
    Choice { id: "google", title: "Google Ads", description: "Search & Shopping campaigns", icon: "🔍" },
    Choice { id: "whatsapp", title: "WhatsApp Business", description: "Customer messaging automation", icon: "💬" },
    Choice { id: "email", title: "Email Provider", description: "SMTP or API integration", icon: "✉️" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl PricingTier {
    pub fn is_custom(&self) -> bool {
        self.price == "Custom"
    }
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        price: "$49",
        description: "Perfect for small stores",
        features: &["2 AI Agents", "1,000 AI actions/mo", "Basic analytics", "Email support"],
        popular: false,
    },
    PricingTier {
        name: "Growth",
        price: "$199",
        description: "Most popular for scaling brands",
        features: &[
            "All 8 AI Agents",
            "10,000 AI actions/mo",
            "Advanced analytics",
            "Priority support",
            "Custom rules",
        ],
        popular: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        description: "For large operations",
        features: &[
            "Unlimited AI actions",
            "Dedicated account manager",
            "Custom integrations",
            "SLA guarantee",
            "White-label option",
        ],
        popular: false,
    },
];

/// Marketing highlights under the landing hero
pub const HIGHLIGHTS: [Choice; 4] = [
    Choice { id: "autopilot", title: "24/7 Autopilot", description: "Agents monitor and optimize around the clock.", icon: "⚡" },
    Choice { id: "unified", title: "Unified Dashboard", description: "Every channel, one view.", icon: "🧭" },
    Choice { id: "explainable", title: "Explainable Actions", description: "Every change comes with a reason and a result.", icon: "🔎" },
    Choice { id: "growth", title: "Revenue Growth", description: "Average 3.4x ROAS improvement within the first 30 days.", icon: "📈" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentOrder {
    pub id: &'static str,
    pub customer: &'static str,
    pub amount: f64,
    pub status: &'static str,
    pub time: &'static str,
}

pub const RECENT_ORDERS: [RecentOrder; 4] = [
    RecentOrder { id: "#12345", customer: "Sarah J.", amount: 89.0, status: "processing", time: "5 min ago" },
    RecentOrder { id: "#12344", customer: "Mike C.", amount: 156.0, status: "shipped", time: "15 min ago" },
    RecentOrder { id: "#12343", customer: "Emma W.", amount: 234.0, status: "delivered", time: "1 hour ago" },
    RecentOrder { id: "#12342", customer: "John D.", amount: 78.0, status: "processing", time: "2 hours ago" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowStockItem {
    pub name: &'static str,
    pub stock: u32,
    pub sku: &'static str,
}

pub const LOW_STOCK: [LowStockItem; 3] = [
    LowStockItem { name: "Summer Dress - Size M", stock: 3, sku: "SD-M-001" },
    LowStockItem { name: "Canvas Sneakers - White", stock: 5, sku: "CS-W-042" },
    LowStockItem { name: "Leather Belt - Brown", stock: 2, sku: "LB-B-015" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub frequency: &'static str,
    pub last_generated: &'static str,
    pub icon: &'static str,
}

pub const AUTOMATED_REPORTS: [ReportEntry; 4] = [
    ReportEntry {
        name: "Weekly Performance Report",
        description: "Comprehensive overview of all marketing channels",
        frequency: "Weekly",
        last_generated: "Jan 29, 2024",
        icon: "📈",
    },
    ReportEntry {
        name: "Monthly Revenue Analysis",
        description: "Detailed revenue breakdown by channel and product",
        frequency: "Monthly",
        last_generated: "Jan 28, 2024",
        icon: "💵",
    },
    ReportEntry {
        name: "Customer Segmentation Report",
        description: "Customer behavior and segment analysis",
        frequency: "Monthly",
        last_generated: "Jan 28, 2024",
        icon: "👥",
    },
    ReportEntry {
        name: "Ad Campaign Performance",
        description: "Meta and Google Ads campaign analysis",
        frequency: "Weekly",
        last_generated: "Jan 27, 2024",
        icon: "📊",
    },
];

/// (name, created)
pub const CUSTOM_REPORTS: [(&str, &str); 3] = [
    ("Q4 2023 Summary", "Jan 15, 2024"),
    ("Black Friday Analysis", "Dec 1, 2023"),
    ("Holiday Season Report", "Dec 26, 2023"),
];

/// (id, label)
pub const ANALYTICS_TABS: [(&str, &str); 4] = [
    ("overview", "Overview"),
    ("acquisition", "Acquisition"),
    ("behavior", "Behavior"),
    ("conversions", "Conversions"),
];

pub const TIME_RANGES: [(&str, &str); 3] = [("7d", "7 days"), ("30d", "30 days"), ("90d", "90 days")];

pub const SETTINGS_TABS: [(&str, &str); 6] = [
    ("profile", "Profile"),
    ("workspace", "Workspace"),
    ("notifications", "Notifications"),
    ("billing", "Billing"),
    ("team", "Team"),
    ("integrations", "Integrations"),
];

/// (page, sessions, bounce rate %)
pub const TOP_LANDING_PAGES: [(&str, u32, u32); 4] = [
    ("/products/summer-dress", 2340, 32),
    ("/category/new-arrivals", 1890, 28),
    ("/", 1560, 45),
    ("/sale", 1200, 25),
];

/// (step, count, rate %)
pub const CONVERSION_FUNNEL: [(&str, u32, u32); 5] = [
    ("Visited Site", 5000, 100),
    ("Viewed Product", 3200, 64),
    ("Added to Cart", 1200, 24),
    ("Started Checkout", 800, 16),
    ("Completed Purchase", 500, 10),
];

/// (title, value)
pub const BEHAVIOR_STATS: [(&str, &str); 4] = [
    ("Avg. Session", "3:42"),
    ("Pages/Session", "4.2"),
    ("Bounce Rate", "35%"),
    ("New Visitors", "62%"),
];

/// Visual emphasis of a detail row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Warning,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
    pub tone: Tone,
}

const fn row(label: &'static str, value: &'static str, note: &'static str, tone: Tone) -> DetailRow {
    DetailRow { label, value, note, tone }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub rows: &'static [DetailRow],
}

const META_ADS: &[DetailSection] = &[
    DetailSection {
        title: "Optimization Rules",
        rows: &[
            row("Pause ads with CTR < 1%", "3 triggers", "Active", Tone::Positive),
            row("Scale ads with ROAS > 3x", "7 triggers", "Active", Tone::Positive),
            row("Rotate creatives on fatigue score > 70", "2 triggers", "Active", Tone::Positive),
            row("Auto-adjust budget by performance", "12 triggers", "Active", Tone::Positive),
        ],
    },
    DetailSection {
        title: "Action Log",
        rows: &[
            row("Budget increased by 20%", "2 hours ago", "ROAS reached 3.4x, exceeding target", Tone::Positive),
            row("Paused 2 underperforming ads", "5 hours ago", "CTR dropped below 0.8%", Tone::Positive),
            row("New creative variant launched", "8 hours ago", "Original creative fatigue score at 75", Tone::Positive),
            row("Audience expansion applied", "1 day ago", "Lookalike audience exhaustion detected", Tone::Positive),
            row("Bid strategy adjusted", "1 day ago", "Cost-per-result increased by 15%", Tone::Warning),
        ],
    },
];

const GOOGLE_ADS: &[DetailSection] = &[
    DetailSection {
        title: "Keywords",
        rows: &[
            row("summer dresses", "456 clicks", "Phrase · $0.45 CPC · 23 conversions", Tone::Positive),
            row("womens fashion", "892 clicks", "Broad · $0.32 CPC · 45 conversions", Tone::Positive),
            row("buy clothes online", "234 clicks", "Exact · $0.67 CPC · 12 conversions", Tone::Positive),
            row("fashion store near me", "123 clicks", "Phrase · $0.55 CPC · 8 conversions", Tone::Warning),
            row("cheap clothing", "Negative", "Excluded from all campaigns", Tone::Neutral),
        ],
    },
    DetailSection {
        title: "Recent Bid Changes",
        rows: &[
            row("Increased bid for \"summer dresses\"", "+15%", "", Tone::Positive),
            row("Added negative keyword \"cheap\"", "New", "", Tone::Neutral),
            row("Decreased bid for \"fashion store\"", "-10%", "", Tone::Negative),
            row("Paused low-performing ad group", "Saved $12", "", Tone::Negative),
        ],
    },
];

const SOCIAL_MEDIA: &[DetailSection] = &[
    DetailSection {
        title: "Trending Hashtags",
        rows: &[
            row("#summerfashion", "4.2M", "Trending up", Tone::Positive),
            row("#ootd", "12.8M", "Stable", Tone::Neutral),
            row("#streetstyle", "8.1M", "Trending up", Tone::Positive),
            row("#fashioninspo", "5.6M", "Trending down", Tone::Negative),
        ],
    },
    DetailSection {
        title: "Engagement by Format",
        rows: &[
            row("Reels", "8.2%", "", Tone::Positive),
            row("Stories", "5.4%", "", Tone::Neutral),
            row("Posts", "3.8%", "", Tone::Neutral),
            row("Carousels", "6.1%", "", Tone::Positive),
        ],
    },
];

const WHATSAPP: &[DetailSection] = &[
    DetailSection {
        title: "Message Templates",
        rows: &[
            row("Order Confirmation", "234 uses", "98% success", Tone::Positive),
            row("Shipping Update", "189 uses", "97% success", Tone::Positive),
            row("Abandoned Cart", "156 uses", "23% success", Tone::Warning),
            row("COD Confirmation", "89 uses", "76% success", Tone::Positive),
            row("Review Request", "67 uses", "34% success", Tone::Warning),
        ],
    },
    DetailSection {
        title: "Automated Flows",
        rows: &[
            row("Order Tracking Flow", "234 triggers", "Active", Tone::Positive),
            row("Abandoned Cart Recovery", "156 triggers", "Active", Tone::Positive),
            row("COD Confirmation", "89 triggers", "Active", Tone::Positive),
            row("Post-Purchase Upsell", "45 triggers", "Paused", Tone::Warning),
        ],
    },
];

const SEO: &[DetailSection] = &[
    DetailSection {
        title: "SEO Score Breakdown",
        rows: &[
            row("Technical SEO", "85", "", Tone::Positive),
            row("On-Page SEO", "72", "", Tone::Neutral),
            row("Content Quality", "68", "", Tone::Neutral),
            row("Backlink Profile", "45", "", Tone::Warning),
        ],
    },
    DetailSection {
        title: "Keyword Rankings",
        rows: &[
            row("summer dresses online", "#5", "▲ 3 · 12,400 searches", Tone::Positive),
            row("buy fashion clothes", "#12", "▼ 2 · 8,900 searches", Tone::Negative),
            row("womens clothing store", "#8", "▲ 5 · 15,600 searches", Tone::Positive),
            row("trendy outfits 2024", "#3", "▲ 1 · 6,700 searches", Tone::Positive),
        ],
    },
    DetailSection {
        title: "Page Issues",
        rows: &[
            row("/products/summer-dress", "High", "Missing meta description", Tone::Negative),
            row("/category/shoes", "Medium", "Duplicate title tag", Tone::Warning),
            row("/about", "Low", "Low word count", Tone::Neutral),
        ],
    },
];

const ANALYTICS: &[DetailSection] = &[
    DetailSection {
        title: "AI Insights",
        rows: &[
            row("ROAS up 23% this week", "Review campaigns", "Meta Ads performance significantly improved after audience optimization.", Tone::Positive),
            row("Cart abandonment increased", "Check checkout flow", "Cart abandonment rate went up by 5% compared to last week.", Tone::Warning),
            row("New traffic source detected", "Explore opportunity", "TikTok referral traffic increased by 150% this month.", Tone::Neutral),
        ],
    },
    DetailSection {
        title: "Recent Reports",
        rows: &[
            row("Weekly Performance Report", "Jan 29, 2024", "Automatic", Tone::Neutral),
            row("Monthly Revenue Analysis", "Jan 28, 2024", "Automatic", Tone::Neutral),
            row("Ad Campaign Summary", "Jan 25, 2024", "Custom", Tone::Neutral),
            row("Customer Behavior Report", "Jan 22, 2024", "Custom", Tone::Neutral),
        ],
    },
];

const EMAIL_CRM: &[DetailSection] = &[
    DetailSection {
        title: "Email Flows",
        rows: &[
            row("Welcome Series", "$1,240", "234 subscribers · 52% open · 12% click", Tone::Positive),
            row("Abandoned Cart", "$890", "156 subscribers · 48% open · 15% click", Tone::Positive),
            row("Post-Purchase", "$345", "89 subscribers · 45% open · 8% click", Tone::Neutral),
            row("Re-engagement", "$156", "312 subscribers · 28% open · 5% click", Tone::Warning),
        ],
    },
    DetailSection {
        title: "Segments",
        rows: &[
            row("VIP Customers", "234", "Avg. value $450", Tone::Positive),
            row("New Subscribers", "856", "Avg. value $0", Tone::Neutral),
            row("At-Risk", "123", "Avg. value $89", Tone::Warning),
            row("Repeat Buyers", "445", "Avg. value $280", Tone::Positive),
        ],
    },
];

const WEBSITE_FUNNEL: &[DetailSection] = &[
    DetailSection {
        title: "Funnel",
        rows: &[
            row("Landing Page", "5,000 visitors", "", Tone::Neutral),
            row("Product Page", "3,200 visitors", "36% drop-off", Tone::Warning),
            row("Add to Cart", "1,200 visitors", "62.5% drop-off", Tone::Negative),
            row("Checkout", "800 visitors", "33% drop-off", Tone::Warning),
            row("Purchase", "500 visitors", "37.5% drop-off", Tone::Warning),
        ],
    },
    DetailSection {
        title: "Suggestions",
        rows: &[
            row("Product Page", "High impact", "Add trust badges near Add to Cart button", Tone::Negative),
            row("Checkout", "High impact", "Reduce form fields from 8 to 5", Tone::Negative),
            row("Cart", "Medium impact", "Show shipping cost earlier", Tone::Warning),
            row("Homepage", "Medium impact", "Add exit-intent popup with discount", Tone::Warning),
        ],
    },
];

/// Detail panels shown on an agent's own page
pub fn agent_details(agent_type: AgentType) -> &'static [DetailSection] {
    match agent_type {
        AgentType::MetaAds => META_ADS,
        AgentType::GoogleAds => GOOGLE_ADS,
        AgentType::SocialMedia => SOCIAL_MEDIA,
        AgentType::Whatsapp => WHATSAPP,
        AgentType::Seo => SEO,
        AgentType::Analytics => ANALYTICS,
        AgentType::EmailCrm => EMAIL_CRM,
        AgentType::WebsiteFunnel => WEBSITE_FUNNEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_agent_has_details() {
        for agent_type in AgentType::ALL {
            let sections = agent_details(agent_type);
            assert!(!sections.is_empty(), "{} has no detail panels", agent_type);
            assert!(sections.iter().all(|s| !s.rows.is_empty()));
        }
    }

    #[test]
    fn test_option_lists() {
        assert_eq!(ONBOARDING_STEP_TITLES.len(), crate::model::ONBOARDING_STEPS as usize);
        assert!(INDUSTRIES.contains(&"Fashion & Apparel"));
        assert!(REVENUE_RANGES.contains(&"$50K - $100K"));
        assert_eq!(PRICING_TIERS.iter().filter(|t| t.popular).count(), 1);
        assert!(PRICING_TIERS[2].is_custom());
    }
}
