// src/model/agent.rs

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, ModelError};

/// The eight automation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentType {
    MetaAds,
    GoogleAds,
    SocialMedia,
    Whatsapp,
    Seo,
    Analytics,
    EmailCrm,
    WebsiteFunnel,
}

impl AgentType {
    pub const ALL: [AgentType; 8] = [
        Self::MetaAds,
        Self::GoogleAds,
        Self::SocialMedia,
        Self::Whatsapp,
        Self::Seo,
        Self::Analytics,
        Self::EmailCrm,
        Self::WebsiteFunnel,
    ];

    /// URL segment and wire tag
    pub fn slug(&self) -> &'static str {
        match self {
            Self::MetaAds => "meta-ads",
            Self::GoogleAds => "google-ads",
            Self::SocialMedia => "social-media",
            Self::Whatsapp => "whatsapp",
            Self::Seo => "seo",
            Self::Analytics => "analytics",
            Self::EmailCrm => "email-crm",
            Self::WebsiteFunnel => "website-funnel",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Paused,
    Error,
}

impl AgentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Error => "Error",
        }
    }

    /// Status after the UI toggle; an errored agent resumes as active
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Paused,
            Self::Paused | Self::Error => Self::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAction {
    pub id: String,
    pub agent_id: String,
    pub action: String,
    pub reason: String,
    pub result: String,
    pub timestamp: DateTime<Utc>,
    pub status: ActionStatus,
}

/// Agent metric cell: either a number or preformatted text such as `"4.5%"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub name: String,
    pub description: String,
    pub status: AgentStatus,
    pub icon: String,
    pub permissions: Vec<String>,
    pub actions_today: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_action: Option<AgentAction>,
    pub metrics: BTreeMap<String, MetricValue>,
}

impl Agent {
    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }

    pub fn metric(&self, key: &str) -> Option<&MetricValue> {
        self.metrics.get(key)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        for permission in &self.permissions {
            require_non_empty("permissions", permission)?;
        }
        if let Some(action) = &self.last_action {
            if action.agent_id != self.id {
                return Err(ModelError::OutOfRange {
                    field: "lastAction.agentId",
                    value: action.agent_id.clone(),
                });
            }
        }
        Ok(())
    }
}
