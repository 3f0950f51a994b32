// src/error.rs - Crate-wide error type for storage, configuration and session failures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Configuration {
        key: Option<String>,
        validation_errors: Vec<String>,
    },
    Storage {
        key: Option<String>,
        operation: StorageOperation,
    },
    Validation {
        field: Option<String>,
        rules: Vec<String>,
    },
    Authentication {
        reason: String,
    },
    Session {
        operation: SessionOperation,
    },
    Serialization,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageOperation {
    Open,
    Read,
    Write,
    Delete,
    List,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOperation {
    Restore,
    Login,
    LoginWithGoogle,
    Logout,
    UpdateWorkspace,
    CompleteOnboarding,
}

impl fmt::Display for SessionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Restore => "restore",
            Self::Login => "login",
            Self::LoginWithGoogle => "login_with_google",
            Self::Logout => "logout",
            Self::UpdateWorkspace => "update_workspace",
            Self::CompleteOnboarding => "complete_onboarding",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub id: Uuid,
    pub kind: ErrorKind,
    pub message: String,
    pub severity: ErrorSeverity,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub metadata: HashMap<String, serde_json::Value>,
    pub causes: Vec<String>,
}

impl Error {
    /// Creates a new error with the specified kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            severity: ErrorSeverity::Medium,
            source: "unknown".to_string(),
            timestamp: crate::utils::Time::now(),
            metadata: HashMap::new(),
            causes: Vec::new(),
        }
    }

    /// Sets the error severity
    pub fn severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the error source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Adds metadata to the error
    pub fn metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Adds a cause to the error chain
    pub fn caused_by(mut self, cause: impl fmt::Display) -> Self {
        self.causes.push(cause.to_string());
        self
    }

    /// Creates a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Configuration {
                key: None,
                validation_errors: Vec::new(),
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a configuration error tied to a specific key
    pub fn config_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(
            ErrorKind::Configuration {
                key: Some(key.into()),
                validation_errors: vec![message.clone()],
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a key-value storage error
    pub fn storage(
        key: Option<&str>,
        operation: StorageOperation,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::Storage {
                key: key.map(str::to_string),
                operation,
            },
            message,
        )
        .source("storage")
    }

    /// Creates a validation error for a single field
    pub fn validation(field: impl Into<String>, rule: impl Into<String>) -> Self {
        let rule = rule.into();
        Self::new(
            ErrorKind::Validation {
                field: Some(field.into()),
                rules: vec![rule.clone()],
            },
            rule,
        )
        .severity(ErrorSeverity::Low)
    }

    /// Creates an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self::new(ErrorKind::Authentication { reason: msg.clone() }, msg)
            .severity(ErrorSeverity::High)
    }

    /// Creates a session lifecycle error
    pub fn session(operation: SessionOperation, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Session { operation }, message).source("session_manager")
    }

    /// Creates a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.source, self.id, self.message
        )
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::Io, err.to_string())
            .source("std::io::Error")
            .severity(ErrorSeverity::High)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(err.to_string()).source("serde_json")
    }
}

impl From<crate::model::ModelError> for Error {
    fn from(err: crate::model::ModelError) -> Self {
        Error::validation(err.field(), err.to_string()).source("model")
    }
}

/// Extension trait for Results to add context
pub trait ResultExt<T> {
    /// Adds context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Sets the error source
    fn with_source(self, source: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let message = f();
            Error::new(
                ErrorKind::Configuration {
                    key: None,
                    validation_errors: vec![e.to_string()],
                },
                message,
            )
            .caused_by(e)
        })
    }

    fn with_source(self, source: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::serialization(e.to_string()).source(source).caused_by(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::config("Invalid configuration value")
            .source("config_manager")
            .metadata("key", serde_json::Value::String("storage.namespace".to_string()));

        assert_eq!(error.severity, ErrorSeverity::High);
        assert_eq!(error.source, "config_manager");
        assert!(matches!(error.kind, ErrorKind::Configuration { .. }));
        assert!(error.metadata.contains_key("key"));
    }

    #[test]
    fn test_storage_error() {
        let error = Error::storage(Some("reon_user"), StorageOperation::Write, "quota exceeded");
        assert_eq!(error.source, "storage");
        assert!(matches!(
            error.kind,
            ErrorKind::Storage { key: Some(ref k), operation: StorageOperation::Write } if k == "reon_user"
        ));
    }

    #[test]
    fn test_session_error_display() {
        let error = Error::session(SessionOperation::Login, "a login is already in progress");
        let rendered = error.to_string();
        assert!(rendered.contains("session_manager"));
        assert!(rendered.contains("already in progress"));
    }

    #[test]
    fn test_serde_json_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let error: Error = parse.unwrap_err().into();
        assert!(matches!(error.kind, ErrorKind::Serialization));
        assert_eq!(error.source, "serde_json");
    }

    #[test]
    fn test_result_ext_context() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let error = io.with_context(|| "failed to read reon.yaml".to_string()).unwrap_err();
        assert_eq!(error.message, "failed to read reon.yaml");
        assert_eq!(error.causes, vec!["missing".to_string()]);
    }
}
