// src/catalog/mod.rs

//! Immutable mock data behind every dashboard view
//!
//! Nothing here is mutated at runtime. Session-owned records ([`User`],
//! [`Workspace`]) are handed out as fresh templates; everything else is a
//! shared `'static` slice.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::model::{
    ActionStatus, AdAccount, AdPlatform, Agent, AgentAction, AgentStatus, AgentType, Campaign,
    CampaignStatus, Customer, DashboardMetrics, MetricValue, PerformancePoint, Plan, RevenuePoint,
    Segment, Store, StorePlatform, TrafficSource, User, Workspace,
};
use crate::utils::Time;

pub mod content;

/// The single accepted email/password pair
pub const DEMO_EMAIL: &str = "boss@reon.ai";
pub const DEMO_PASSWORD: &str = "reon123";

/// Email assigned by the simulated Google sign-in
pub const GOOGLE_EMAIL: &str = "boss@gmail.com";

/// Exact, case-sensitive match against the demo credential
pub fn validate_credentials(email: &str, password: &str) -> bool {
    email == DEMO_EMAIL && password == DEMO_PASSWORD
}

pub fn mock_user() -> User {
    User {
        id: "usr_001".to_string(),
        email: DEMO_EMAIL.to_string(),
        name: "Alex Morgan".to_string(),
        avatar: None,
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH),
    }
}

pub fn mock_workspace() -> Workspace {
    Workspace {
        id: "ws_001".to_string(),
        name: "Main Workspace".to_string(),
        brand_name: "TechStyle".to_string(),
        website: "https://techstyle.com".to_string(),
        industry: "Fashion & Apparel".to_string(),
        country: "United States".to_string(),
        currency: "USD".to_string(),
        monthly_revenue: "$50K - $100K".to_string(),
        goals: vec!["sales".to_string(), "brand-awareness".to_string()],
        plan: Plan::Growth,
        onboarding_completed: true,
    }
}

static STORE: Lazy<Store> = Lazy::new(|| Store {
    id: "store_001".to_string(),
    platform: StorePlatform::Shopify,
    name: "TechStyle Store".to_string(),
    url: "techstyle.myshopify.com".to_string(),
    connected: true,
    products_count: 156,
    orders_today: 47,
    revenue: 8432.0,
});

pub fn store() -> &'static Store {
    &STORE
}

static AD_ACCOUNTS: Lazy<Vec<AdAccount>> = Lazy::new(|| {
    vec![
        AdAccount {
            id: "ad_001".to_string(),
            platform: AdPlatform::Meta,
            name: "TechStyle Meta Ads".to_string(),
            connected: true,
            spend: 847.0,
            impressions: 125_000,
            clicks: 3200,
            conversions: 89,
        },
        AdAccount {
            id: "ad_002".to_string(),
            platform: AdPlatform::Google,
            name: "TechStyle Google Ads".to_string(),
            connected: true,
            spend: 400.0,
            impressions: 85_000,
            clicks: 2100,
            conversions: 45,
        },
    ]
});

pub fn ad_accounts() -> &'static [AdAccount] {
    &AD_ACCOUNTS
}

struct AgentSeed {
    id: &'static str,
    agent_type: AgentType,
    name: &'static str,
    description: &'static str,
    status: AgentStatus,
    icon: &'static str,
    permissions: &'static [&'static str],
    actions_today: u32,
    action_id: &'static str,
    action: &'static str,
    reason: &'static str,
    result: &'static str,
    age_ms: i64,
    action_status: ActionStatus,
    metrics: &'static [(&'static str, Metric)],
}

#[derive(Clone, Copy)]
enum Metric {
    Num(f64),
    Text(&'static str),
}

const AGENT_SEEDS: [AgentSeed; 8] = [
    AgentSeed {
        id: "agent_meta",
        agent_type: AgentType::MetaAds,
        name: "Meta Ads AI",
        description: "Manages Facebook & Instagram advertising campaigns",
        status: AgentStatus::Active,
        icon: "📱",
        permissions: &[
            "ads_management",
            "ads_read",
            "business_management",
            "pages_read_engagement",
            "instagram_basic",
        ],
        actions_today: 12,
        action_id: "action_001",
        action: "Budget increased by 20%",
        reason: "ROAS reached 3.4x, exceeding target of 2.5x",
        result: "Daily budget: $150 → $180",
        age_ms: 1_800_000,
        action_status: ActionStatus::Success,
        metrics: &[
            ("spend", Metric::Num(847.0)),
            ("roas", Metric::Num(3.4)),
            ("campaigns", Metric::Num(5.0)),
            ("activeAds", Metric::Num(23.0)),
        ],
    },
    AgentSeed {
        id: "agent_google",
        agent_type: AgentType::GoogleAds,
        name: "Google Ads AI",
        description: "Optimizes Search & Shopping campaigns",
        status: AgentStatus::Active,
        icon: "🔍",
        permissions: &["campaign_management", "keyword_optimization", "bid_adjustment"],
        actions_today: 8,
        action_id: "action_002",
        action: "Paused underperforming keywords",
        reason: "CTR below 1% for 7 consecutive days",
        result: "5 keywords paused, $45/day saved",
        age_ms: 3_600_000,
        action_status: ActionStatus::Success,
        metrics: &[
            ("spend", Metric::Num(400.0)),
            ("roas", Metric::Num(2.8)),
            ("campaigns", Metric::Num(3.0)),
            ("keywords", Metric::Num(156.0)),
        ],
    },
    AgentSeed {
        id: "agent_social",
        agent_type: AgentType::SocialMedia,
        name: "Social Media AI",
        description: "Creates and schedules social content",
        status: AgentStatus::Active,
        icon: "📸",
        permissions: &["post_content", "schedule_posts", "analytics_read"],
        actions_today: 4,
        action_id: "action_003",
        action: "Scheduled 3 Instagram posts",
        reason: "Best engagement times identified: 9am, 1pm, 7pm",
        result: "Posts queued for next 24 hours",
        age_ms: 7_200_000,
        action_status: ActionStatus::Success,
        metrics: &[
            ("posts", Metric::Num(24.0)),
            ("engagement", Metric::Text("4.5%")),
            ("followers", Metric::Text("12.4K")),
            ("reach", Metric::Text("45K")),
        ],
    },
    AgentSeed {
        id: "agent_whatsapp",
        agent_type: AgentType::Whatsapp,
        name: "WhatsApp Bot AI",
        description: "Automated customer support & cart recovery",
        status: AgentStatus::Active,
        icon: "💬",
        permissions: &["send_messages", "read_messages", "template_messages"],
        actions_today: 156,
        action_id: "action_004",
        action: "Recovered abandoned cart",
        reason: "Customer left $89 cart 2 hours ago",
        result: "Order completed - $89 recovered",
        age_ms: 900_000,
        action_status: ActionStatus::Success,
        metrics: &[
            ("messages", Metric::Num(892.0)),
            ("recovery", Metric::Text("23%")),
            ("responses", Metric::Num(156.0)),
            ("satisfaction", Metric::Text("94%")),
        ],
    },
    AgentSeed {
        id: "agent_seo",
        agent_type: AgentType::Seo,
        name: "SEO AI",
        description: "Optimizes search rankings and content",
        status: AgentStatus::Active,
        icon: "📈",
        permissions: &["content_edit", "meta_tags", "keyword_research"],
        actions_today: 6,
        action_id: "action_005",
        action: "Updated product meta descriptions",
        reason: "15 products had missing SEO tags",
        result: "15 product pages optimized",
        age_ms: 14_400_000,
        action_status: ActionStatus::Success,
        metrics: &[
            ("score", Metric::Num(78.0)),
            ("keywords", Metric::Num(45.0)),
            ("ranking", Metric::Num(12.0)),
            ("traffic", Metric::Text("5.2K")),
        ],
    },
    AgentSeed {
        id: "agent_analytics",
        agent_type: AgentType::Analytics,
        name: "Analytics AI",
        description: "Unified insights and recommendations",
        status: AgentStatus::Active,
        icon: "📊",
        permissions: &["data_read", "report_generation", "insights"],
        actions_today: 3,
        action_id: "action_006",
        action: "Generated weekly performance report",
        reason: "Scheduled weekly analysis",
        result: "Report available in Reports section",
        age_ms: 28_800_000,
        action_status: ActionStatus::Success,
        metrics: &[
            ("reports", Metric::Num(12.0)),
            ("insights", Metric::Num(34.0)),
            ("accuracy", Metric::Text("96%")),
            ("predictions", Metric::Num(8.0)),
        ],
    },
    AgentSeed {
        id: "agent_email",
        agent_type: AgentType::EmailCrm,
        name: "Email & CRM AI",
        description: "Automated email flows and segmentation",
        status: AgentStatus::Active,
        icon: "✉️",
        permissions: &["send_emails", "segment_customers", "ab_testing"],
        actions_today: 2,
        action_id: "action_007",
        action: "Launched abandoned cart flow",
        reason: "34 carts abandoned in last 24h",
        result: "Email sequence triggered for 34 customers",
        age_ms: 43_200_000,
        action_status: ActionStatus::Success,
        metrics: &[
            ("sent", Metric::Num(1250.0)),
            ("openRate", Metric::Text("42%")),
            ("clickRate", Metric::Text("8.5%")),
            ("revenue", Metric::Text("$2.4K")),
        ],
    },
    AgentSeed {
        id: "agent_website",
        agent_type: AgentType::WebsiteFunnel,
        name: "Website & Funnel AI",
        description: "CRO optimization and funnel analysis",
        status: AgentStatus::Paused,
        icon: "🌐",
        permissions: &["page_edit", "funnel_analysis", "ab_testing"],
        actions_today: 0,
        action_id: "action_008",
        action: "Agent paused by user",
        reason: "Manual override requested",
        result: "Agent inactive",
        age_ms: 86_400_000,
        action_status: ActionStatus::Pending,
        metrics: &[
            ("pages", Metric::Num(12.0)),
            ("conversion", Metric::Text("3.2%")),
            ("tests", Metric::Num(2.0)),
            ("suggestions", Metric::Num(5.0)),
        ],
    },
];

impl AgentSeed {
    fn build(&self, now: DateTime<Utc>) -> Agent {
        let metrics: BTreeMap<String, MetricValue> = self
            .metrics
            .iter()
            .map(|(key, metric)| {
                let value = match metric {
                    Metric::Num(n) => MetricValue::Number(*n),
                    Metric::Text(t) => MetricValue::Text((*t).to_string()),
                };
                ((*key).to_string(), value)
            })
            .collect();

        Agent {
            id: self.id.to_string(),
            agent_type: self.agent_type,
            name: self.name.to_string(),
            description: self.description.to_string(),
            status: self.status,
            icon: self.icon.to_string(),
            permissions: self.permissions.iter().map(|p| (*p).to_string()).collect(),
            actions_today: self.actions_today,
            last_action: Some(AgentAction {
                id: self.action_id.to_string(),
                agent_id: self.id.to_string(),
                action: self.action.to_string(),
                reason: self.reason.to_string(),
                result: self.result.to_string(),
                timestamp: now - Duration::milliseconds(self.age_ms),
                status: self.action_status,
            }),
            metrics,
        }
    }
}

/// All eight agents, with last-action timestamps relative to now
pub fn agents() -> Vec<Agent> {
    agents_at(Time::now())
}

/// All eight agents, with last-action timestamps relative to `now`
pub fn agents_at(now: DateTime<Utc>) -> Vec<Agent> {
    AGENT_SEEDS.iter().map(|seed| seed.build(now)).collect()
}

pub fn agent(agent_type: AgentType) -> Option<Agent> {
    AGENT_SEEDS
        .iter()
        .find(|seed| seed.agent_type == agent_type)
        .map(|seed| seed.build(Time::now()))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

static CAMPAIGNS: Lazy<Vec<Campaign>> = Lazy::new(|| {
    let rows: [(&str, &str, AdPlatform, CampaignStatus, f64, f64, u64, u64, u64, f64, f64, f64, u32); 5] = [
        ("camp_001", "Summer Sale - Lookalike", AdPlatform::Meta, CampaignStatus::Active, 150.0, 127.0, 45_000, 1200, 34, 2.67, 0.11, 4.2, 20),
        ("camp_002", "Retargeting - Cart Abandoners", AdPlatform::Meta, CampaignStatus::Active, 80.0, 72.0, 28_000, 890, 28, 3.18, 0.08, 5.8, 18),
        ("camp_003", "Brand Search", AdPlatform::Google, CampaignStatus::Active, 100.0, 89.0, 32_000, 1100, 22, 3.44, 0.08, 3.1, 15),
        ("camp_004", "Shopping - Best Sellers", AdPlatform::Google, CampaignStatus::Active, 200.0, 178.0, 65_000, 2100, 45, 3.23, 0.08, 3.8, 10),
        ("camp_005", "New Collection Launch", AdPlatform::Meta, CampaignStatus::Paused, 300.0, 245.0, 89_000, 2800, 56, 3.15, 0.09, 2.9, 5),
    ];

    rows.into_iter()
        .map(
            |(id, name, platform, status, budget, spent, impressions, clicks, conversions, ctr, cpc, roas, day)| {
                Campaign {
                    id: id.to_string(),
                    name: name.to_string(),
                    platform,
                    status,
                    budget,
                    spent,
                    impressions,
                    clicks,
                    conversions,
                    ctr,
                    cpc,
                    roas,
                    created_at: date(2024, 1, day),
                }
            },
        )
        .collect()
});

pub fn campaigns() -> &'static [Campaign] {
    &CAMPAIGNS
}

static CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    let rows: [(&str, &str, &str, u32, f64, u32, Segment); 8] = [
        ("cust_001", "Sarah Johnson", "sarah.j@email.com", 5, 489.0, 28, Segment::Vip),
        ("cust_002", "Michael Chen", "mchen@email.com", 3, 267.0, 27, Segment::Returning),
        ("cust_003", "Emily Davis", "emily.d@email.com", 1, 89.0, 29, Segment::New),
        ("cust_004", "Robert Wilson", "rwilson@email.com", 8, 1234.0, 26, Segment::Vip),
        ("cust_005", "Lisa Anderson", "lisa.a@email.com", 2, 156.0, 20, Segment::AtRisk),
        ("cust_006", "James Brown", "jbrown@email.com", 1, 78.0, 29, Segment::New),
        ("cust_007", "Jennifer Martinez", "jmartinez@email.com", 4, 345.0, 25, Segment::Returning),
        ("cust_008", "David Lee", "dlee@email.com", 6, 678.0, 28, Segment::Vip),
    ];

    rows.into_iter()
        .map(|(id, name, email, orders, total_spent, day, segment)| Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            orders,
            total_spent,
            last_order: date(2024, 1, day),
            segment,
        })
        .collect()
});

pub fn customers() -> &'static [Customer] {
    &CUSTOMERS
}

static DASHBOARD_METRICS: Lazy<DashboardMetrics> = Lazy::new(|| DashboardMetrics {
    today_spend: 1247.0,
    revenue: 8432.0,
    roas: 6.76,
    orders: 47,
    active_campaigns: 12,
    ai_actions_today: 189,
    visitors: 3456,
    conversion_rate: 3.2,
});

pub fn dashboard_metrics() -> &'static DashboardMetrics {
    &DASHBOARD_METRICS
}

static REVENUE_SERIES: Lazy<Vec<RevenuePoint>> = Lazy::new(|| {
    [
        ("Mon", 1200.0, 180.0),
        ("Tue", 1450.0, 195.0),
        ("Wed", 980.0, 165.0),
        ("Thu", 1680.0, 210.0),
        ("Fri", 2100.0, 245.0),
        ("Sat", 1890.0, 220.0),
        ("Sun", 1420.0, 190.0),
    ]
    .into_iter()
    .map(|(day, revenue, spend)| RevenuePoint {
        day: day.to_string(),
        revenue,
        spend,
    })
    .collect()
});

/// Revenue against ad spend over the last seven days
pub fn revenue_series() -> &'static [RevenuePoint] {
    &REVENUE_SERIES
}

static TRAFFIC_SOURCES: Lazy<Vec<TrafficSource>> = Lazy::new(|| {
    [
        ("Meta Ads", 45.0, "#6366f1"),
        ("Google Ads", 25.0, "#8b5cf6"),
        ("Organic", 20.0, "#22c55e"),
        ("Direct", 10.0, "#f59e0b"),
    ]
    .into_iter()
    .map(|(name, value, color)| TrafficSource {
        name: name.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
});

pub fn traffic_sources() -> &'static [TrafficSource] {
    &TRAFFIC_SOURCES
}

static PERFORMANCE_TREND: Lazy<Vec<PerformancePoint>> = Lazy::new(|| {
    [
        ("01/23", 2.8, 2.1, 2.8),
        ("01/24", 3.1, 2.3, 3.0),
        ("01/25", 2.9, 2.0, 2.7),
        ("01/26", 3.4, 2.5, 3.2),
        ("01/27", 3.8, 2.8, 3.5),
        ("01/28", 4.1, 3.0, 3.8),
        ("01/29", 3.9, 2.9, 3.6),
    ]
    .into_iter()
    .map(|(date, roas, ctr, cvr)| PerformancePoint {
        date: date.to_string(),
        roas,
        ctr,
        cvr,
    })
    .collect()
});

pub fn performance_trend() -> &'static [PerformancePoint] {
    &PERFORMANCE_TREND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials() {
        assert!(validate_credentials("boss@reon.ai", "reon123"));
        assert!(!validate_credentials("Boss@reon.ai", "reon123"));
        assert!(!validate_credentials("boss@reon.ai", "reon1234"));
        assert!(!validate_credentials("", ""));
    }

    #[test]
    fn test_templates_are_valid() {
        let user = mock_user();
        assert_eq!(user.email, DEMO_EMAIL);
        assert!(user.validate().is_ok());

        let workspace = mock_workspace();
        assert!(workspace.onboarding_completed);
        assert_eq!(workspace.plan, Plan::Growth);
        assert!(workspace.validate().is_ok());
    }

    #[test]
    fn test_catalog_records_validate() {
        for campaign in campaigns() {
            campaign.validate().unwrap();
        }
        for customer in customers() {
            customer.validate().unwrap();
        }
        for agent in agents() {
            agent.validate().unwrap();
        }
    }

    #[test]
    fn test_agents_cover_every_type_once() {
        let agents = agents();
        assert_eq!(agents.len(), 8);
        for agent_type in AgentType::ALL {
            assert_eq!(agents.iter().filter(|a| a.agent_type == agent_type).count(), 1);
        }
        assert_eq!(agent(AgentType::WebsiteFunnel).unwrap().status, AgentStatus::Paused);
    }

    #[test]
    fn test_agent_timestamps_relative_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 1, 29, 12, 0, 0).unwrap();
        let agents = agents_at(now);
        let whatsapp = agents
            .iter()
            .find(|a| a.agent_type == AgentType::Whatsapp)
            .unwrap();
        let action = whatsapp.last_action.as_ref().unwrap();
        assert_eq!(now - action.timestamp, Duration::minutes(15));
        assert_eq!(whatsapp.metric("recovery"), Some(&MetricValue::Text("23%".to_string())));
    }

    #[test]
    fn test_chart_series() {
        assert_eq!(revenue_series().len(), 7);
        assert_eq!(performance_trend().len(), 7);
        let share: f64 = traffic_sources().iter().map(|s| s.value).sum();
        assert_eq!(share, 100.0);
        assert_eq!(campaigns().len(), 5);
        assert_eq!(customers().len(), 8);
        assert_eq!(ad_accounts().len(), 2);
        assert_eq!(store().orders_today, 47);
    }
}
