// Export configuration

use crate::{LabelTable, Result, RuleMetadataExporter};
use ruleform_config::{ConfigError, ConfigManager, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix for export settings, e.g. `RULEFORM_LOCALE`
pub const ENV_PREFIX: &str = "RULEFORM";

/// Languages with a built-in label table; regional codes such as `en-US` select
/// their language's table
pub const SUPPORTED_LOCALES: &[&str] = &["ru", "en"];

/// Settings for [`RuleMetadataExporter`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Built-in label table to start from
    pub locale: String,
    /// Delimiter between description values
    pub description_separator: String,
    /// Extra identifier → label entries, applied in document order on top of
    /// the locale table
    pub labels: LabelTable,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            locale: "ru".to_string(),
            description_separator: String::new(),
            labels: LabelTable::empty(),
        }
    }
}

impl Validate for ExportConfig {
    fn validate(&self) -> ruleform_config::Result<()> {
        if LabelTable::for_locale(&self.locale).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "locale must be one of {:?} (optionally with a region), got {:?}",
                SUPPORTED_LOCALES, self.locale
            )));
        }
        Ok(())
    }
}

impl ExportConfig {
    /// Load from a JSON, TOML or env-format file (`.env`, `settings.env`).
    ///
    /// Keys in an env-format file are unprefixed (`LOCALE=en`); use
    /// [`from_dotenv`](Self::from_dotenv) for `RULEFORM_*` variables.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut manager = ConfigManager::new();
        manager.load_file(path)?;
        Self::load(&manager)
    }

    /// Load from `RULEFORM_*` process environment variables
    pub fn from_env() -> Result<Self> {
        let mut manager = ConfigManager::with_prefix(ENV_PREFIX);
        manager.load_env();
        Self::load(&manager)
    }

    /// Load from explicit `RULEFORM_*` variables
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut manager = ConfigManager::with_prefix(ENV_PREFIX);
        manager.load_vars(vars);
        Self::load(&manager)
    }

    /// Load a `.env` file into the environment, then read `RULEFORM_*` variables
    pub fn from_dotenv(path: Option<&Path>) -> Result<Self> {
        let mut manager = ConfigManager::with_prefix(ENV_PREFIX);
        manager.load_dotenv(path)?;
        Self::load(&manager)
    }

    /// Deserialize and validate whatever the manager has loaded
    pub fn load(manager: &ConfigManager) -> Result<Self> {
        let config: Self = manager.load_validated()?;
        debug!(
            locale = %config.locale,
            labels = config.labels.len(),
            "Loaded export configuration"
        );
        Ok(config)
    }

    /// Locale table with the configured overrides applied
    pub fn label_table(&self) -> LabelTable {
        let base = LabelTable::for_locale(&self.locale).unwrap_or_default();
        self.labels
            .iter()
            .fold(base, |table, (id, label)| table.with_label(id, label))
    }

    pub fn exporter(&self) -> RuleMetadataExporter {
        RuleMetadataExporter::new(self.label_table())
            .with_separator(self.description_separator.as_str())
    }
}
