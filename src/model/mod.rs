// src/model/mod.rs - Typed records for the session snapshot and the mock catalog

//! Field names serialize in camelCase and enum tags in lowercase/kebab-case,
//! so persisted snapshots read the same as the browser build's localStorage.

use thiserror::Error;

pub mod account;
pub mod agent;
pub mod commerce;

pub use account::{OnboardingProgress, Plan, User, Workspace, WorkspacePatch, ONBOARDING_STEPS};
pub use agent::{ActionStatus, Agent, AgentAction, AgentStatus, AgentType, MetricValue};
pub use commerce::{
    AdAccount, AdPlatform, Campaign, CampaignStatus, Customer, DashboardMetrics, PerformancePoint,
    RevenuePoint, Segment, Store, StorePlatform, TrafficSource,
};

/// Boundary validation failures for deserialized records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is not a valid email address: {value}")]
    InvalidEmail { field: &'static str, value: String },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} contains duplicate entry '{value}'")]
    Duplicate { field: &'static str, value: String },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

impl ModelError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::Empty { field }
            | Self::InvalidEmail { field, .. }
            | Self::Negative { field }
            | Self::Duplicate { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        Err(ModelError::Empty { field })
    } else {
        Ok(())
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<(), ModelError> {
    if value < 0.0 || value.is_nan() {
        Err(ModelError::Negative { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    #[test]
    fn test_model_error_converts_to_validation_error() {
        let error: Error = ModelError::Empty { field: "brandName" }.into();
        assert_eq!(error.source, "model");
        assert!(matches!(
            error.kind,
            ErrorKind::Validation { field: Some(ref f), .. } if f == "brandName"
        ));
    }

    #[test]
    fn test_non_negative() {
        assert!(require_non_negative("spend", 0.0).is_ok());
        assert_eq!(
            require_non_negative("spend", -1.0),
            Err(ModelError::Negative { field: "spend" })
        );
        assert!(require_non_negative("spend", f64::NAN).is_err());
    }
}
