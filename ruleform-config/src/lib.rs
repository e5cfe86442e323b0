// Configuration management for Ruleform

pub mod env;
pub mod error;
pub mod loader;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use validation::{ConfigValidator, Validate};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Layered configuration: later loads override earlier keys
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: Map<String, Value>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with environment variable prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            config: Map::new(),
            env_prefix: Some(prefix.into()),
        }
    }

    /// Load configuration from environment variables
    pub fn load_env(&mut self) -> &mut Self {
        let vars = EnvLoader::new(self.env_prefix.clone()).load();
        self.load_vars(vars)
    }

    /// Load configuration from explicit variables, filtered by the prefix
    pub fn load_vars<I>(&mut self, vars: I) -> &mut Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let loaded = EnvLoader::new(self.env_prefix.clone()).load_from(vars);
        debug!(count = loaded.len(), "Loaded environment configuration");
        for (key, value) in loaded {
            self.config.insert(key, Value::String(value));
        }
        self
    }

    /// Load a `.env` file into the process environment, then read the environment.
    ///
    /// Without a path a missing `.env` is ignored.
    pub fn load_dotenv(&mut self, path: Option<&Path>) -> Result<&mut Self> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        Ok(self.load_env())
    }

    /// Load configuration from a file, detecting the format by extension
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        let data = ConfigLoader::auto(path)?.load_file(path)?;
        debug!(path = %path.display(), "Loaded configuration file");
        self.merge_value(data);
        Ok(self)
    }

    /// Merge a JSON object on top of the current configuration
    pub fn merge_value(&mut self, value: Value) -> &mut Self {
        if let Value::Object(map) = value {
            self.config.extend(map);
        }
        self
    }

    /// Set a configuration value
    pub fn set<T: serde::Serialize>(&mut self, key: &str, value: T) -> Result<&mut Self> {
        self.config.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Get a configuration value
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .config
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        Ok(serde_json::from_value(value.clone())?)
    }

    /// Get a configuration value with default
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Check if a key exists
    pub fn has(&self, key: &str) -> bool {
        self.config.contains_key(key)
    }

    /// Get all configuration keys
    pub fn keys(&self) -> Vec<String> {
        self.config.keys().cloned().collect()
    }

    /// Deserialize the whole configuration and validate it
    pub fn load_validated<T: DeserializeOwned + Validate>(&self) -> Result<T> {
        let validated: T = serde_json::from_value(Value::Object(self.config.clone()))?;
        validated.validate()?;
        Ok(validated)
    }
}
