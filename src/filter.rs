// src/filter.rs - Tab, search and aggregate helpers over catalog slices

//! Every function here borrows its input and returns references in the
//! original relative order unless it explicitly sorts.

use crate::model::{
    AdAccount, AdPlatform, Agent, AgentAction, AgentStatus, Campaign, CampaignStatus, Customer,
    Segment,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub platform: Option<AdPlatform>,
    pub status: Option<CampaignStatus>,
}

impl CampaignFilter {
    pub fn platform(platform: AdPlatform) -> Self {
        Self {
            platform: Some(platform),
            status: None,
        }
    }

    /// Parses a tab id: `all`, `meta` or `google`
    pub fn from_tab(tab: &str) -> Self {
        match tab {
            "meta" => Self::platform(AdPlatform::Meta),
            "google" => Self::platform(AdPlatform::Google),
            _ => Self::default(),
        }
    }

    pub fn matches(&self, campaign: &Campaign) -> bool {
        self.platform.map_or(true, |p| campaign.platform == p)
            && self.status.map_or(true, |s| campaign.status == s)
    }
}

pub fn filter_campaigns<'a>(campaigns: &'a [Campaign], filter: &CampaignFilter) -> Vec<&'a Campaign> {
    campaigns.iter().filter(|c| filter.matches(c)).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    pub segment: Option<Segment>,
    pub query: String,
}

impl CustomerFilter {
    pub fn new(segment: Option<Segment>, query: impl Into<String>) -> Self {
        Self {
            segment,
            query: query.into(),
        }
    }

    /// Segment tab AND case-insensitive substring of name or email
    pub fn matches(&self, customer: &Customer) -> bool {
        if let Some(segment) = self.segment {
            if customer.segment != segment {
                return false;
            }
        }

        let query = self.query.to_lowercase();
        query.is_empty()
            || customer.name.to_lowercase().contains(&query)
            || customer.email.to_lowercase().contains(&query)
    }
}

pub fn filter_customers<'a>(customers: &'a [Customer], filter: &CustomerFilter) -> Vec<&'a Customer> {
    customers.iter().filter(|c| filter.matches(c)).collect()
}

/// Customers per segment tab; `None` counts everyone
pub fn segment_count(customers: &[Customer], segment: Option<Segment>) -> usize {
    match segment {
        Some(segment) => customers.iter().filter(|c| c.segment == segment).count(),
        None => customers.len(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AgentFilter {
    #[default]
    All,
    Active,
    Paused,
}

impl AgentFilter {
    pub fn from_tab(tab: &str) -> Self {
        match tab {
            "active" => Self::Active,
            "paused" => Self::Paused,
            _ => Self::All,
        }
    }

    pub fn matches(&self, status: AgentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == AgentStatus::Active,
            Self::Paused => status == AgentStatus::Paused,
        }
    }
}

pub fn filter_agents<'a>(agents: &'a [Agent], filter: AgentFilter) -> Vec<&'a Agent> {
    agents.iter().filter(|a| filter.matches(a.status)).collect()
}

pub fn agent_count(agents: &[Agent], filter: AgentFilter) -> usize {
    agents.iter().filter(|a| filter.matches(a.status)).count()
}

/// The `limit` most recent last-actions across agents, newest first
pub fn recent_actions(agents: &[Agent], limit: usize) -> Vec<(&Agent, &AgentAction)> {
    let mut actions: Vec<(&Agent, &AgentAction)> = agents
        .iter()
        .filter_map(|agent| agent.last_action.as_ref().map(|action| (agent, action)))
        .collect();

    actions.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp));
    actions.truncate(limit);
    actions
}

/// First `limit` campaigns in catalog order
pub fn campaign_preview(campaigns: &[Campaign], limit: usize) -> &[Campaign] {
    &campaigns[..limit.min(campaigns.len())]
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CampaignTotals {
    pub budget: f64,
    pub spent: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub average_roas: f64,
}

pub fn campaign_totals<'a>(campaigns: impl IntoIterator<Item = &'a Campaign>) -> CampaignTotals {
    let mut totals = CampaignTotals::default();
    let mut count = 0usize;
    let mut roas_sum = 0.0;

    for campaign in campaigns {
        totals.budget += campaign.budget;
        totals.spent += campaign.spent;
        totals.impressions += campaign.impressions;
        totals.clicks += campaign.clicks;
        totals.conversions += campaign.conversions;
        roas_sum += campaign.roas;
        count += 1;
    }

    if count > 0 {
        totals.average_roas = roas_sum / count as f64;
    }
    totals
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdTotals {
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
}

pub fn ad_totals(accounts: &[AdAccount]) -> AdTotals {
    accounts.iter().fold(AdTotals::default(), |mut totals, account| {
        totals.spend += account.spend;
        totals.impressions += account.impressions;
        totals.clicks += account.clicks;
        totals.conversions += account.conversions;
        totals
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CustomerTotals {
    pub customers: usize,
    pub revenue: f64,
    pub orders: u32,
    /// Mean total spend per customer
    pub average_lifetime_value: f64,
}

pub fn customer_totals<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> CustomerTotals {
    let mut totals = customers
        .into_iter()
        .fold(CustomerTotals::default(), |mut totals, customer| {
            totals.customers += 1;
            totals.revenue += customer.total_spent;
            totals.orders += customer.orders;
            totals
        });

    if totals.customers > 0 {
        totals.average_lifetime_value = totals.revenue / totals.customers as f64;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_platform_filter_preserves_order() {
        let all = catalog::campaigns();
        let meta = filter_campaigns(all, &CampaignFilter::platform(AdPlatform::Meta));

        let expected: Vec<&Campaign> = all.iter().filter(|c| c.platform == AdPlatform::Meta).collect();
        assert_eq!(meta, expected);
        let ids: Vec<&str> = meta.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["camp_001", "camp_002", "camp_005"]);
    }

    #[test]
    fn test_campaign_tab_and_status() {
        let all = catalog::campaigns();
        assert_eq!(filter_campaigns(all, &CampaignFilter::from_tab("all")).len(), all.len());
        assert_eq!(filter_campaigns(all, &CampaignFilter::from_tab("google")).len(), 2);

        let paused_meta = CampaignFilter {
            platform: Some(AdPlatform::Meta),
            status: Some(CampaignStatus::Paused),
        };
        let result = filter_campaigns(all, &paused_meta);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "camp_005");
    }

    #[test]
    fn test_customer_segment_and_search_intersect() {
        let all = catalog::customers();

        let vip_d = filter_customers(all, &CustomerFilter::new(Some(Segment::Vip), "d"));
        let expected: Vec<&Customer> = all
            .iter()
            .filter(|c| c.segment == Segment::Vip)
            .filter(|c| c.name.to_lowercase().contains('d') || c.email.to_lowercase().contains('d'))
            .collect();
        assert_eq!(vip_d, expected);
        let ids: Vec<&str> = vip_d.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["cust_008"]);

        // email-only match, case-insensitive
        let by_email = filter_customers(all, &CustomerFilter::new(Some(Segment::Vip), "RWILSON@"));
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Robert Wilson");

        // segment mismatch excludes even an exact name match
        assert!(filter_customers(all, &CustomerFilter::new(Some(Segment::New), "Sarah")).is_empty());
    }

    #[test]
    fn test_empty_query_matches_segment_only() {
        let all = catalog::customers();
        let vip = filter_customers(all, &CustomerFilter::new(Some(Segment::Vip), ""));
        assert_eq!(vip.len(), segment_count(all, Some(Segment::Vip)));
        assert_eq!(segment_count(all, None), 8);
        assert_eq!(segment_count(all, Some(Segment::AtRisk)), 1);
    }

    #[test]
    fn test_agent_filters() {
        let agents = catalog::agents();
        assert_eq!(agent_count(&agents, AgentFilter::All), 8);
        assert_eq!(agent_count(&agents, AgentFilter::Active), 7);
        let paused = filter_agents(&agents, AgentFilter::from_tab("paused"));
        assert_eq!(paused.len(), 1);
        assert_eq!(paused[0].id, "agent_website");
    }

    #[test]
    fn test_recent_actions_newest_first() {
        let now = Utc.with_ymd_and_hms(2024, 1, 29, 12, 0, 0).unwrap();
        let agents = catalog::agents_at(now);
        let recent = recent_actions(&agents, 5);

        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].0.id, "agent_whatsapp");
        assert_eq!(recent[1].0.id, "agent_meta");
        assert!(recent.windows(2).all(|w| w[0].1.timestamp >= w[1].1.timestamp));
    }

    #[test]
    fn test_totals() {
        let totals = campaign_totals(catalog::campaigns());
        assert_eq!(totals.budget, 830.0);
        assert_eq!(totals.conversions, 185);
        assert!((totals.average_roas - 3.96).abs() < 1e-9);

        let ads = ad_totals(catalog::ad_accounts());
        assert_eq!(ads.spend, 1247.0);
        assert_eq!(ads.clicks, 5300);

        let customers = customer_totals(catalog::customers());
        assert_eq!(customers.customers, 8);
        assert_eq!(customers.revenue, 3336.0);
        assert!((customers.average_lifetime_value - 417.0).abs() < 1e-9);

        assert_eq!(customer_totals(std::iter::empty()).average_lifetime_value, 0.0);
    }

    #[test]
    fn test_campaign_preview_keeps_catalog_order() {
        let preview = campaign_preview(catalog::campaigns(), 5);
        let ids: Vec<&str> = preview.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["camp_001", "camp_002", "camp_003", "camp_004", "camp_005"]);

        assert_eq!(campaign_preview(catalog::campaigns(), 2).len(), 2);
        assert_eq!(campaign_preview(catalog::campaigns(), 50).len(), catalog::campaigns().len());
        assert!(campaign_preview(&[], 5).is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let customers = catalog::customers();
        let ids = |query: &str| -> Vec<String> {
            filter_customers(customers, &CustomerFilter::new(None, query))
                .iter()
                .map(|c| c.id.clone())
                .collect()
        };

        assert_eq!(ids(" j"), vec!["cust_001"]);
        assert_eq!(ids("j"), vec!["cust_001", "cust_006", "cust_007"]);
        assert!(ids("   ").is_empty());
    }
}
