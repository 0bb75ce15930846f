mod loader;
pub mod typed;
pub mod value;

use std::collections::HashMap;
use std::path::Path;

pub use typed::ConfigProperties;
pub use value::{ConfigValue, FromConfigValue};

/// Environment variable that selects the active profile.
pub const PROFILE_ENV: &str = "ECOMM_PROFILE";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// The requested key was not found in the configuration.
    NotFound(String),
    /// The value could not be converted to the requested type.
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    /// An I/O or YAML parsing error occurred while loading config files.
    Load(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(key) => write!(f, "Config key not found: {key}"),
            ConfigError::TypeMismatch { key, expected, found } => {
                write!(f, "Config type mismatch for '{key}': expected {expected}, found {found}")
            }
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Service configuration loaded from YAML files, `.env` files, and environment variables.
///
/// Resolution order (lowest to highest priority):
/// 1. `application.yaml` (base)
/// 2. `application-{profile}.yaml` (profile override)
/// 3. `.env` file (loaded into process environment)
/// 4. `.env.{profile}` file (loaded into process environment)
/// 5. Environment variables (e.g., `DATABASE_URL` overrides `database.url`,
///    `SERVER_REQUEST_TIMEOUT_MS` overrides `server.request-timeout-ms`)
///
/// `.env` files never overwrite already-set environment variables.
///
/// Profile is determined by: `ECOMM_PROFILE` env var > argument > default `"dev"`.
#[derive(Debug, Clone)]
pub struct EcommConfig {
    values: HashMap<String, ConfigValue>,
    profile: String,
}

impl EcommConfig {
    /// Load configuration for `profile` from the current working directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), profile)
    }

    /// Load configuration for `profile`, looking for the YAML and `.env` files in `dir`.
    pub fn load_from(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let active_profile = std::env::var(PROFILE_ENV).unwrap_or_else(|_| profile.to_string());

        let mut values = HashMap::new();

        let base = loader::load_yaml_file(&dir.join("application.yaml"), &mut values)?;
        let overlay = loader::load_yaml_file(
            &dir.join(format!("application-{active_profile}.yaml")),
            &mut values,
        )?;

        // Missing .env files are not an error.
        let _ = dotenvy::from_path(dir.join(".env"));
        let _ = dotenvy::from_path(dir.join(format!(".env.{active_profile}")));

        loader::overlay_env(&mut values, std::env::vars());

        tracing::debug!(
            profile = %active_profile,
            base_file = base,
            profile_file = overlay,
            keys = values.len(),
            "configuration loaded"
        );

        Ok(EcommConfig {
            values,
            profile: active_profile,
        })
    }

    /// Create a config from a YAML string (useful for testing).
    pub fn from_yaml_str(yaml: &str, profile: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        loader::load_yaml_str(yaml, &mut values)?;
        Ok(EcommConfig {
            values,
            profile: profile.to_string(),
        })
    }

    /// Create an empty config (useful for testing).
    pub fn empty() -> Self {
        EcommConfig {
            values: HashMap::new(),
            profile: "test".to_string(),
        }
    }

    /// Set a value programmatically.
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Get a typed value for the given dot-separated key.
    ///
    /// A key that is only present in normalized form (set from an environment
    /// variable with no YAML counterpart) is found as well.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the key does not exist, or
    /// `ConfigError::TypeMismatch` if the value cannot be converted.
    pub fn get<V: FromConfigValue>(&self, key: &str) -> Result<V, ConfigError> {
        let value = self
            .values
            .get(key)
            .or_else(|| self.values.get(&loader::normalize_key(key)))
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))?;
        V::from_config_value(value, key)
    }

    /// Get a typed value, returning `default` only if the key is missing.
    ///
    /// A present value of the wrong type is still an error.
    pub fn get_or<V: FromConfigValue>(&self, key: &str, default: V) -> Result<V, ConfigError> {
        match self.get(key) {
            Err(ConfigError::NotFound(_)) => Ok(default),
            other => other,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key) || self.values.contains_key(&loader::normalize_key(key))
    }

    /// The active profile name.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Build a typed section.
    pub fn section<C: ConfigProperties>(&self) -> Result<C, ConfigError> {
        C::from_config(self)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}
