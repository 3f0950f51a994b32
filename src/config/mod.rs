// src/config/mod.rs

//! Layered application configuration
//!
//! Configuration is assembled from ordered layers:
//! - file layers (YAML, JSON, TOML)
//! - an environment layer (`REON_<SECTION>_<FIELD>`)
//! - in-memory layers (defaults and runtime overrides)
//!
//! Layers are merged by ascending priority into a single JSON document that
//! is then read back as a typed [`AppConfig`] or by dotted key.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use tokio::sync::broadcast;
use tokio::sync::RwLock;

use crate::error::{Error, ErrorKind, Result};
use crate::utils::Time;

/// Environment variable prefix for the environment layer
pub const ENV_PREFIX: &str = "REON";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigChangeEvent {
    pub key: String,
    pub value: Value,
    pub old_value: Option<Value>,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error for '{}': {}", self.key, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigSource {
    File { path: PathBuf, format: ConfigFormat },
    Environment { prefix: String },
    Memory { data: Value },
}

#[derive(Debug, Clone)]
pub struct ConfigLayer {
    pub name: String,
    pub source: ConfigSource,
    pub priority: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Checks the values serde cannot reject on its own
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ValidationError {
                key: "logging.level".to_string(),
                message: format!(
                    "unknown log level '{}', expected one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        let namespace = self.storage.namespace.trim();
        if namespace.is_empty() {
            errors.push(ValidationError {
                key: "storage.namespace".to_string(),
                message: "namespace must not be empty".to_string(),
            });
        } else if !namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            errors.push(ValidationError {
                key: "storage.namespace".to_string(),
                message: "namespace may only contain letters, digits, '_' and '-'".to_string(),
            });
        }

        errors
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
    pub debug: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "Reon.ai".to_string(),
            environment: "development".to_string(),
            debug: cfg!(debug_assertions),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            show_target: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Prefix of every persisted key, `<namespace>_user` and so on
    pub namespace: String,
    pub backend: StorageBackend,
    /// Directory for the file backend; defaults to the platform data dir
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: "reon".to_string(),
            backend: StorageBackend::Auto,
            data_dir: None,
        }
    }
}

impl StorageConfig {
    pub fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.namespace, suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// File storage on native targets, localStorage in the browser
    Auto,
    Memory,
    File,
    LocalStorage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub login_delay_ms: u64,
    pub google_delay_ms: u64,
    pub onboarding_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            google_delay_ms: 1500,
            onboarding_delay_ms: 1500,
        }
    }
}

impl SessionConfig {
    /// No simulated latency at all
    pub fn instant() -> Self {
        Self {
            login_delay_ms: 0,
            google_delay_ms: 0,
            onboarding_delay_ms: 0,
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn google_delay(&self) -> Duration {
        Duration::from_millis(self.google_delay_ms)
    }

    pub fn onboarding_delay(&self) -> Duration {
        Duration::from_millis(self.onboarding_delay_ms)
    }
}

pub struct ConfigManager {
    layers: Vec<ConfigLayer>,
    merged_config: Arc<RwLock<Value>>,
    change_notifier: broadcast::Sender<ConfigChangeEvent>,
}

impl fmt::Debug for ConfigManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigManager")
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        let (change_notifier, _) = broadcast::channel(100);

        Self {
            layers: Vec::new(),
            merged_config: Arc::new(RwLock::new(Value::Object(Map::new()))),
            change_notifier,
        }
    }

    /// Defaults, an optional config file and the `REON_*` environment,
    /// merged and validated
    pub async fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut manager = Self::new();
        let defaults = serde_json::to_value(AppConfig::default())?;
        manager.add_memory_layer("defaults", defaults, 0);

        if let Some(path) = config_path {
            manager.add_file_layer("file", path, 10)?;
        }

        manager.add_env_layer("env", ENV_PREFIX, 100);
        manager.initialize().await?;
        Ok(manager)
    }

    pub fn add_file_layer<P: AsRef<Path>>(
        &mut self,
        name: impl Into<String>,
        path: P,
        priority: u32,
    ) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        let format = ConfigFormat::from_extension(&path).ok_or_else(|| {
            Error::config(format!(
                "Unsupported configuration file format: {}",
                path.display()
            ))
        })?;

        self.push_layer(ConfigLayer {
            name: name.into(),
            source: ConfigSource::File { path, format },
            priority,
        });
        Ok(())
    }

    pub fn add_env_layer(&mut self, name: impl Into<String>, prefix: impl Into<String>, priority: u32) {
        self.push_layer(ConfigLayer {
            name: name.into(),
            source: ConfigSource::Environment {
                prefix: prefix.into(),
            },
            priority,
        });
    }

    pub fn add_memory_layer(&mut self, name: impl Into<String>, data: Value, priority: u32) {
        self.push_layer(ConfigLayer {
            name: name.into(),
            source: ConfigSource::Memory { data },
            priority,
        });
    }

    fn push_layer(&mut self, layer: ConfigLayer) {
        self.layers.push(layer);
        self.layers.sort_by_key(|l| l.priority);
    }

    /// Merges all layers and rejects configurations that fail validation
    pub async fn initialize(&self) -> Result<()> {
        self.merge_configurations().await?;

        let errors = self.validate().await?;
        if !errors.is_empty() {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(Error::new(
                ErrorKind::Configuration {
                    key: errors.first().map(|e| e.key.clone()),
                    validation_errors: messages.clone(),
                },
                messages.join("; "),
            )
            .source("config_manager"));
        }

        tracing::debug!("Configuration loaded from {} layers", self.layers.len());
        Ok(())
    }

    pub async fn set<T>(&self, key: &str, value: T) -> Result<()>
    where
        T: Serialize,
    {
        let serialized_value = serde_json::to_value(value).map_err(|e| {
            Error::config_key(key, format!("Failed to serialize config value: {}", e))
        })?;

        let mut config = self.merged_config.write().await;
        let old_value = get_nested_value(&config, key);
        set_nested_value(&mut config, key, serialized_value.clone());

        let _ = self.change_notifier.send(ConfigChangeEvent {
            key: key.to_string(),
            value: serialized_value,
            old_value,
            timestamp: Time::now(),
            source: "config_manager".to_string(),
        });

        Ok(())
    }

    pub async fn get<T>(&self, key: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let config = self.merged_config.read().await;
        let value = get_nested_value(&config, key).ok_or_else(|| {
            Error::config_key(key, format!("Configuration key '{}' not found", key))
        })?;

        serde_json::from_value(value).map_err(|e| {
            Error::config_key(key, format!("Failed to deserialize config value: {}", e))
        })
    }

    pub async fn get_config(&self) -> AppConfig {
        let config = self.merged_config.read().await;
        match serde_json::from_value(config.clone()) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Failed to deserialize config, using defaults: {}", e);
                AppConfig::default()
            }
        }
    }

    pub fn subscribe_to_changes(&self) -> broadcast::Receiver<ConfigChangeEvent> {
        self.change_notifier.subscribe()
    }

    pub async fn reload(&self) -> Result<()> {
        self.merge_configurations().await?;

        let _ = self.change_notifier.send(ConfigChangeEvent {
            key: "_reload".to_string(),
            value: Value::String("reloaded".to_string()),
            old_value: None,
            timestamp: Time::now(),
            source: "config_manager".to_string(),
        });

        Ok(())
    }

    pub async fn validate(&self) -> Result<Vec<ValidationError>> {
        let config = self.merged_config.read().await;
        let parsed: AppConfig = serde_json::from_value(config.clone()).map_err(|e| {
            Error::config(format!("Configuration does not match the expected shape: {}", e))
                .source("config_manager")
        })?;
        Ok(parsed.validate())
    }

    async fn merge_configurations(&self) -> Result<()> {
        let mut merged = Value::Object(Map::new());

        for layer in &self.layers {
            let layer_config = load_layer_config(layer)?;
            merge_values(&mut merged, layer_config);
        }

        *self.merged_config.write().await = merged;
        Ok(())
    }

    /// Layer names, priorities and sources in merge order
    pub fn get_metadata(&self) -> Value {
        serde_json::json!({
            "layers": self.layers.len(),
            "layer_info": self.layers.iter().map(|l| {
                serde_json::json!({
                    "name": l.name,
                    "priority": l.priority,
                    "source_type": match &l.source {
                        ConfigSource::File { path, .. } => path.display().to_string(),
                        ConfigSource::Environment { prefix } => format!("env:{}", prefix),
                        ConfigSource::Memory { .. } => "memory".to_string(),
                    }
                })
            }).collect::<Vec<_>>(),
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn load_layer_config(layer: &ConfigLayer) -> Result<Value> {
    match &layer.source {
        #[cfg(not(target_arch = "wasm32"))]
        ConfigSource::File { path, format } => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                Error::config(format!("Failed to read config file {}: {}", path.display(), e))
            })?;

            match format {
                ConfigFormat::Json => serde_json::from_str(&content)
                    .map_err(|e| Error::config(format!("Failed to parse JSON config: {}", e))),
                ConfigFormat::Yaml => serde_yaml::from_str(&content)
                    .map_err(|e| Error::config(format!("Failed to parse YAML config: {}", e))),
                ConfigFormat::Toml => toml::from_str(&content)
                    .map_err(|e| Error::config(format!("Failed to parse TOML config: {}", e))),
            }
        }

        #[cfg(target_arch = "wasm32")]
        ConfigSource::File { .. } => Err(Error::config("File loading not supported in web platform")),

        #[cfg(not(target_arch = "wasm32"))]
        ConfigSource::Environment { prefix } => Ok(env_layer(prefix, std::env::vars())),

        #[cfg(target_arch = "wasm32")]
        ConfigSource::Environment { .. } => Ok(Value::Object(Map::new())),

        ConfigSource::Memory { data } => Ok(data.clone()),
    }
}

/// `PREFIX_SECTION_FIELD_NAME=value` becomes `{"section": {"field_name": value}}`
fn env_layer(prefix: &str, vars: impl Iterator<Item = (String, String)>) -> Value {
    let mut env_config = Map::new();
    let marker = format!("{}_", prefix);

    for (key, value) in vars {
        let Some(rest) = key.strip_prefix(&marker) else {
            continue;
        };
        let rest = rest.to_lowercase();
        let Some((section, field)) = rest.split_once('_') else {
            continue;
        };
        if section.is_empty() || field.is_empty() {
            continue;
        }

        let section_map = env_config
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = section_map {
            map.insert(field.to_string(), parse_env_value(value));
        }
    }

    Value::Object(env_config)
}

fn parse_env_value(value: String) -> Value {
    if let Ok(bool_val) = value.parse::<bool>() {
        Value::Bool(bool_val)
    } else if let Ok(int_val) = value.parse::<i64>() {
        Value::Number(Number::from(int_val))
    } else if let Some(number) = value.parse::<f64>().ok().and_then(Number::from_f64) {
        Value::Number(number)
    } else {
        Value::String(value)
    }
}

fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(&key) {
                    Some(target_value) => merge_values(target_value, source_value),
                    None => {
                        target_map.insert(key, source_value);
                    }
                }
            }
        }
        (target, source) => {
            *target = source;
        }
    }
}

fn get_nested_value(config: &Value, key: &str) -> Option<Value> {
    let mut current = config;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current.clone())
}

fn set_nested_value(config: &mut Value, key: &str, value: Value) {
    let mut current = config;
    let mut parts = key.split('.').peekable();

    while let Some(part) = parts.next() {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Value::Object(map) = current else {
            return;
        };

        if parts.peek().is_none() {
            map.insert(part.to_string(), value);
            return;
        }

        current = map
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_manager_creation() {
        let manager = ConfigManager::new();
        assert_eq!(manager.layers.len(), 0);
    }

    #[tokio::test]
    async fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage.namespace, "reon");
        assert_eq!(config.storage.key("auth"), "reon_auth");
        assert_eq!(config.session.login_delay_ms, 1000);
        assert_eq!(config.session.google_delay_ms, 1500);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_log_level_is_warn() {
        assert_eq!(LoggingConfig::default().level, "warn");
    }

    #[tokio::test]
    async fn test_metadata_lists_layers_in_merge_order() {
        let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(b"{}").unwrap();

        let manager = ConfigManager::load(Some(temp_file.path())).await.unwrap();
        let metadata = manager.get_metadata();
        assert_eq!(metadata["layers"], 3);

        let names: Vec<&str> = metadata["layer_info"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["defaults", "file", "env"]);
        assert_eq!(metadata["layer_info"][0]["source_type"], "memory");
        assert_eq!(metadata["layer_info"][2]["source_type"], "env:REON");
    }

    #[tokio::test]
    async fn test_file_layer() {
        let mut manager = ConfigManager::new();
        manager.add_memory_layer("defaults", serde_json::to_value(AppConfig::default()).unwrap(), 0);

        let mut temp_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        temp_file
            .write_all(b"app:\n  name: \"Test App\"\nstorage:\n  namespace: demo\n  backend: memory\n")
            .unwrap();

        manager.add_file_layer("test", temp_file.path(), 10).unwrap();
        manager.initialize().await.unwrap();

        let app_name: String = manager.get("app.name").await.unwrap();
        assert_eq!(app_name, "Test App");

        let config = manager.get_config().await;
        assert_eq!(config.storage.namespace, "demo");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        // untouched sections keep their defaults
        assert_eq!(config.session.onboarding_delay_ms, 1500);
    }

    #[tokio::test]
    async fn test_toml_file_layer() {
        let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        temp_file
            .write_all(b"[session]\nlogin_delay_ms = 0\n\n[logging]\nformat = \"json\"\n")
            .unwrap();

        let manager = ConfigManager::load(Some(temp_file.path())).await.unwrap();
        let config = manager.get_config().await;
        assert_eq!(config.session.login_delay_ms, 0);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut manager = ConfigManager::new();
        assert!(manager.add_file_layer("bad", temp_file.path(), 0).is_err());
    }

    #[test]
    fn test_environment_layer() {
        let vars = vec![
            ("REONTEST_SESSION_LOGIN_DELAY_MS".to_string(), "250".to_string()),
            ("REONTEST_APP_DEBUG".to_string(), "false".to_string()),
            ("REONTEST_STORAGE_NAMESPACE".to_string(), "acme".to_string()),
            ("UNRELATED_VALUE".to_string(), "1".to_string()),
        ];

        let layer = env_layer("REONTEST", vars.into_iter());
        assert_eq!(layer["session"]["login_delay_ms"], Value::from(250));
        assert_eq!(layer["app"]["debug"], Value::Bool(false));
        assert_eq!(layer["storage"]["namespace"], Value::from("acme"));
        assert!(layer.get("unrelated").is_none());
    }

    #[tokio::test]
    async fn test_environment_overrides_memory() {
        let mut manager = ConfigManager::new();
        manager.add_memory_layer("defaults", serde_json::to_value(AppConfig::default()).unwrap(), 0);

        std::env::set_var("REONENVTEST_SESSION_GOOGLE_DELAY_MS", "5");
        manager.add_env_layer("env", "REONENVTEST", 100);
        manager.initialize().await.unwrap();
        std::env::remove_var("REONENVTEST_SESSION_GOOGLE_DELAY_MS");

        let delay: u64 = manager.get("session.google_delay_ms").await.unwrap();
        assert_eq!(delay, 5);
    }

    #[tokio::test]
    async fn test_memory_layer_priority() {
        let mut manager = ConfigManager::new();
        manager.add_memory_layer("high", serde_json::json!({"app": {"name": "High"}}), 50);
        manager.add_memory_layer("low", serde_json::json!({"app": {"name": "Low", "debug": true}}), 1);
        manager.initialize().await.unwrap();

        let app_name: String = manager.get("app.name").await.unwrap();
        assert_eq!(app_name, "High");
        let debug: bool = manager.get("app.debug").await.unwrap();
        assert!(debug);
    }

    #[tokio::test]
    async fn test_validation_rejects_empty_namespace() {
        let mut manager = ConfigManager::new();
        manager.add_memory_layer("bad", serde_json::json!({"storage": {"namespace": ""}}), 0);
        let err = manager.initialize().await.unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::Configuration { key: Some(ref k), .. } if k == "storage.namespace"
        ));
    }

    #[tokio::test]
    async fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "logging.level");
    }

    #[tokio::test]
    async fn test_set_publishes_change() {
        let manager = ConfigManager::new();
        let mut changes = manager.subscribe_to_changes();

        manager.set("session.login_delay_ms", 10u64).await.unwrap();

        let event = changes.recv().await.unwrap();
        assert_eq!(event.key, "session.login_delay_ms");
        assert_eq!(event.value, Value::from(10));
        assert!(event.old_value.is_none());

        let delay: u64 = manager.get("session.login_delay_ms").await.unwrap();
        assert_eq!(delay, 10);
    }

    #[tokio::test]
    async fn test_missing_key() {
        let manager = ConfigManager::new();
        let result: Result<String> = manager.get("app.name").await;
        assert!(result.is_err());
    }
}
