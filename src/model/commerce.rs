// src/model/commerce.rs - Store, ad, campaign and customer records

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_non_empty, require_non_negative, ModelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorePlatform {
    Shopify,
    Woocommerce,
}

impl StorePlatform {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shopify => "Shopify",
            Self::Woocommerce => "WooCommerce",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub platform: StorePlatform,
    pub name: String,
    pub url: String,
    pub connected: bool,
    pub products_count: u32,
    pub orders_today: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdPlatform {
    Meta,
    Google,
}

impl AdPlatform {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Meta => "Meta",
            Self::Google => "Google",
        }
    }
}

impl fmt::Display for AdPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdAccount {
    pub id: String,
    pub platform: AdPlatform,
    pub name: String,
    pub connected: bool,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
}

impl AdAccount {
    /// Click-through rate in percent
    pub fn ctr(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.clicks as f64 / self.impressions as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub platform: AdPlatform,
    pub status: CampaignStatus,
    pub budget: f64,
    pub spent: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub created_at: NaiveDate,
}

impl Campaign {
    /// Share of the budget already spent, 0-100
    pub fn budget_used_percent(&self) -> f64 {
        if self.budget <= 0.0 {
            0.0
        } else {
            (self.spent / self.budget * 100.0).min(100.0)
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        require_non_negative("budget", self.budget)?;
        require_non_negative("spent", self.spent)?;
        require_non_negative("ctr", self.ctr)?;
        require_non_negative("cpc", self.cpc)?;
        require_non_negative("roas", self.roas)?;
        if self.clicks > self.impressions {
            return Err(ModelError::OutOfRange {
                field: "clicks",
                value: self.clicks.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Segment {
    New,
    Returning,
    Vip,
    AtRisk,
}

impl Segment {
    pub const ALL: [Segment; 4] = [Self::New, Self::Returning, Self::Vip, Self::AtRisk];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Returning => "returning",
            Self::Vip => "vip",
            Self::AtRisk => "at-risk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Returning => "Returning",
            Self::Vip => "VIP",
            Self::AtRisk => "At Risk",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub orders: u32,
    pub total_spent: f64,
    pub last_order: NaiveDate,
    pub segment: Segment,
}

impl Customer {
    pub fn average_order_value(&self) -> f64 {
        if self.orders == 0 {
            0.0
        } else {
            self.total_spent / self.orders as f64
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        require_non_negative("totalSpent", self.total_spent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub today_spend: f64,
    pub revenue: f64,
    pub roas: f64,
    pub orders: u32,
    pub active_campaigns: u32,
    pub ai_actions_today: u32,
    pub visitors: u32,
    pub conversion_rate: f64,
}

/// Daily revenue and ad spend for the weekly chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub day: String,
    pub revenue: f64,
    pub spend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSource {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub date: String,
    pub roas: f64,
    pub ctr: f64,
    pub cvr: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign() -> Campaign {
        Campaign {
            id: "camp_001".to_string(),
            name: "Summer Sale - Lookalike".to_string(),
            platform: AdPlatform::Meta,
            status: CampaignStatus::Active,
            budget: 150.0,
            spent: 127.0,
            impressions: 45000,
            clicks: 1200,
            conversions: 34,
            ctr: 2.67,
            cpc: 0.11,
            roas: 4.2,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        }
    }

    #[test]
    fn test_segment_wire_names() {
        assert_eq!(serde_json::to_value(Segment::AtRisk).unwrap(), "at-risk");
        assert_eq!(Segment::from_slug("vip"), Some(Segment::Vip));
        assert_eq!(Segment::from_slug("lapsed"), None);
        assert!(serde_json::from_str::<Segment>("\"churned\"").is_err());
    }

    #[test]
    fn test_campaign_validation() {
        assert!(campaign().validate().is_ok());
        assert!((campaign().budget_used_percent() - 84.666).abs() < 0.01);

        let mut broken = campaign();
        broken.clicks = 50_000;
        assert_eq!(broken.validate().unwrap_err().field(), "clicks");

        let mut negative = campaign();
        negative.spent = -1.0;
        assert_eq!(negative.validate().unwrap_err(), ModelError::Negative { field: "spent" });
    }

    #[test]
    fn test_campaign_wire_format() {
        let json = serde_json::to_value(campaign()).unwrap();
        assert_eq!(json["platform"], "meta");
        assert_eq!(json["status"], "active");
        assert_eq!(json["createdAt"], "2024-01-20");
    }

    #[test]
    fn test_derived_rates() {
        let account = AdAccount {
            id: "ad_001".to_string(),
            platform: AdPlatform::Meta,
            name: "TechStyle Meta Ads".to_string(),
            connected: true,
            spend: 847.0,
            impressions: 125_000,
            clicks: 3200,
            conversions: 89,
        };
        assert!((account.ctr() - 2.56).abs() < 1e-9);

        let customer = Customer {
            id: "cust_001".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@email.com".to_string(),
            orders: 5,
            total_spent: 489.0,
            last_order: NaiveDate::from_ymd_opt(2024, 1, 28).unwrap(),
            segment: Segment::Vip,
        };
        assert!((customer.average_order_value() - 97.8).abs() < 1e-9);
    }
}
