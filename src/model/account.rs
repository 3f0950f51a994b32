// src/model/account.rs - User, workspace and onboarding records owned by the session

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, ModelError};
use crate::utils::validation;

/// Number of steps in the onboarding wizard
pub const ONBOARDING_STEPS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        if !validation::is_valid_email(&self.email) {
            return Err(ModelError::InvalidEmail {
                field: "email",
                value: self.email.clone(),
            });
        }
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Starter,
    Growth,
    Pro,
}

impl Plan {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Growth => "Growth",
            Self::Pro => "Pro",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub brand_name: String,
    pub website: String,
    pub industry: String,
    pub country: String,
    pub currency: String,
    pub monthly_revenue: String,
    pub goals: Vec<String>,
    pub plan: Plan,
    pub onboarding_completed: bool,
}

impl Workspace {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("currency", &self.currency)?;

        let mut seen = HashSet::new();
        for goal in &self.goals {
            require_non_empty("goals", goal)?;
            if !seen.insert(goal.as_str()) {
                return Err(ModelError::Duplicate {
                    field: "goals",
                    value: goal.clone(),
                });
            }
        }
        Ok(())
    }

    /// Shallow merge: every `Some` field replaces the current value, `None`
    /// leaves it alone. A completed workspace stays completed.
    pub fn apply(&mut self, patch: WorkspacePatch) {
        let WorkspacePatch {
            name,
            brand_name,
            website,
            industry,
            country,
            currency,
            monthly_revenue,
            goals,
            plan,
            onboarding_completed,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(brand_name) = brand_name {
            self.brand_name = brand_name;
        }
        if let Some(website) = website {
            self.website = website;
        }
        if let Some(industry) = industry {
            self.industry = industry;
        }
        if let Some(country) = country {
            self.country = country;
        }
        if let Some(currency) = currency {
            self.currency = currency;
        }
        if let Some(monthly_revenue) = monthly_revenue {
            self.monthly_revenue = monthly_revenue;
        }
        if let Some(goals) = goals {
            self.goals = goals;
        }
        if let Some(plan) = plan {
            self.plan = plan;
        }
        if let Some(completed) = onboarding_completed {
            self.onboarding_completed |= completed;
        }
    }
}

/// Partial workspace update, the typed form of a shallow-merge object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspacePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<bool>,
}

impl WorkspacePatch {
    pub fn completed() -> Self {
        Self {
            onboarding_completed: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Wizard position, persisted under `<namespace>_onboarding`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingProgress {
    pub step: u8,
    pub completed: bool,
}

impl OnboardingProgress {
    pub fn new(step: u8) -> Self {
        let step = step.clamp(1, ONBOARDING_STEPS);
        Self {
            step,
            completed: step >= ONBOARDING_STEPS,
        }
    }
}

impl Default for OnboardingProgress {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn workspace() -> Workspace {
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
            onboarding_completed: false,
        }
    }

    #[test]
    fn test_workspace_wire_format() {
        let json = serde_json::to_value(workspace()).unwrap();
        assert_eq!(json["brandName"], "TechStyle");
        assert_eq!(json["monthlyRevenue"], "$50K - $100K");
        assert_eq!(json["plan"], "growth");
        assert_eq!(json["onboardingCompleted"], false);
    }

    #[test]
    fn test_unknown_plan_rejected() {
        let mut json = serde_json::to_value(workspace()).unwrap();
        json["plan"] = "platinum".into();
        assert!(serde_json::from_value::<Workspace>(json).is_err());
    }

    #[test]
    fn test_patch_changes_only_given_fields() {
        let original = workspace();
        let mut updated = original.clone();
        updated.apply(WorkspacePatch {
            industry: Some("Electronics".to_string()),
            ..WorkspacePatch::default()
        });

        assert_eq!(updated.industry, "Electronics");
        assert_eq!(
            Workspace {
                industry: original.industry.clone(),
                ..updated
            },
            original
        );
    }

    #[test]
    fn test_completion_never_reverts() {
        let mut ws = workspace();
        ws.apply(WorkspacePatch::completed());
        assert!(ws.onboarding_completed);

        ws.apply(WorkspacePatch {
            onboarding_completed: Some(false),
            ..WorkspacePatch::default()
        });
        assert!(ws.onboarding_completed);
    }

    #[test]
    fn test_patch_deserializes_partial_json() {
        let patch: WorkspacePatch =
            serde_json::from_str(r#"{"brandName":"Acme","goals":["leads"]}"#).unwrap();
        assert_eq!(patch.brand_name.as_deref(), Some("Acme"));
        assert_eq!(patch.goals, Some(vec!["leads".to_string()]));
        assert!(patch.industry.is_none());
        assert!(WorkspacePatch::default().is_empty());
    }

    #[test]
    fn test_workspace_validation() {
        assert!(workspace().validate().is_ok());

        let mut dup = workspace();
        dup.goals.push("sales".to_string());
        assert_eq!(dup.validate().unwrap_err().field(), "goals");

        let mut blank = workspace();
        blank.id = " ".to_string();
        assert_eq!(blank.validate().unwrap_err(), ModelError::Empty { field: "id" });
    }

    #[test]
    fn test_user_validation() {
        let user = User {
            id: "usr_001".to_string(),
            email: "boss@reon.ai".to_string(),
            name: "Alex Morgan".to_string(),
            avatar: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        };
        assert!(user.validate().is_ok());
        assert_eq!(user.first_name(), "Alex");

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("avatar").is_none());
        assert!(json.get("createdAt").is_some());

        let broken = User {
            email: "not-an-email".to_string(),
            ..user
        };
        assert_eq!(broken.validate().unwrap_err().field(), "email");
    }

    #[test]
    fn test_onboarding_progress() {
        assert_eq!(OnboardingProgress::default(), OnboardingProgress { step: 1, completed: false });
        assert!(!OnboardingProgress::new(4).completed);
        assert!(OnboardingProgress::new(5).completed);
        assert_eq!(OnboardingProgress::new(9).step, 5);
        assert_eq!(OnboardingProgress::new(0).step, 1);
    }
}
