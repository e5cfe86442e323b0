// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;

/// Environment variable loader.
///
/// With a prefix, only `PREFIX_*` variables are read and keys are returned
/// lowercased with the prefix stripped (`RULEFORM_LOCALE` → `locale`).
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(Some(prefix.into()))
    }

    /// Load variables from the process environment
    pub fn load(&self) -> HashMap<String, String> {
        self.load_from(env::vars())
    }

    /// Load from an explicit set of variables
    pub fn load_from<I>(&self, vars: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        vars.into_iter()
            .filter_map(|(key, value)| self.strip(&key).map(|k| (k, value)))
            .collect()
    }

    fn strip(&self, key: &str) -> Option<String> {
        match &self.prefix {
            Some(prefix) => key
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix('_'))
                .filter(|rest| !rest.is_empty())
                .map(str::to_lowercase),
            None => Some(key.to_lowercase()),
        }
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        env::var(self.full_key(key)).map_err(ConfigError::EnvError)
    }

    /// Load with default value
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefix_is_stripped_and_lowercased() {
        let loader = EnvLoader::with_prefix("RULEFORM");
        let loaded = loader.load_from(vars(&[
            ("RULEFORM_LOCALE", "en"),
            ("RULEFORM_DESCRIPTION_SEPARATOR", ", "),
            ("RULEFORMX_OTHER", "no"),
            ("RULEFORM_", "no"),
            ("PATH", "/bin"),
        ]));

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("locale").map(String::as_str), Some("en"));
        assert_eq!(
            loaded.get("description_separator").map(String::as_str),
            Some(", ")
        );
    }

    #[test]
    fn test_without_prefix_keeps_everything() {
        let loader = EnvLoader::default();
        let loaded = loader.load_from(vars(&[("HOME", "/root"), ("Lang", "C")]));
        assert_eq!(loaded.get("home").map(String::as_str), Some("/root"));
        assert_eq!(loaded.get("lang").map(String::as_str), Some("C"));
    }

    #[test]
    fn test_env_loader_with_default() {
        let loader = EnvLoader::with_prefix("RULEFORM_TEST");
        assert_eq!(loader.load_var_or("NONEXISTENT_12345", "default"), "default");
        assert!(loader.load_var("MISSING_67890").is_err());
    }
}
