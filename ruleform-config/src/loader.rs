// Configuration file loaders

use crate::{ConfigError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
    Env,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "env" => Some(FileFormat::Env),
            _ => None,
        }
    }
}

/// Configuration file loader producing a JSON object
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Pick the format from the file extension.
    ///
    /// Dotenv files (`.env`, `.env.local`, ...) are env-format regardless of
    /// extension.
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_dotenv = path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(|name| name == ".env" || name.starts_with(".env."));
        if is_dotenv {
            return Ok(Self::new(FileFormat::Env));
        }

        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError(format!("No file extension: {}", path.display())))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::LoadError(format!("Unsupported format: {}", ext)))?;

        Ok(Self::new(format))
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Load configuration from file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        self.parse(&content)
    }

    /// Parse configuration from string
    pub fn parse(&self, content: &str) -> Result<Value> {
        let value = match self.format {
            FileFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))?,
            FileFormat::Toml => parse_toml(content)?,
            FileFormat::Env => parse_env(content),
        };

        if !value.is_object() {
            return Err(ConfigError::ParseError(
                "configuration root must be a table".to_string(),
            ));
        }
        Ok(value)
    }
}

fn parse_toml(content: &str) -> Result<Value> {
    let toml_value: toml::Value = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;

    Ok(serde_json::to_value(toml_value)?)
}

fn parse_env(content: &str) -> Value {
    let mut map = serde_json::Map::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_lowercase();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            map.insert(key, Value::String(value.to_string()));
        }
    }

    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let loader = ConfigLoader::new(FileFormat::Json);
        let result = loader.parse(r#"{"locale": "en", "labels": {"a": "b"}}"#).unwrap();
        assert_eq!(result["locale"], "en");
        assert_eq!(result["labels"]["a"], "b");
    }

    #[test]
    fn test_parse_toml() {
        let loader = ConfigLoader::new(FileFormat::Toml);
        let toml = r#"
            locale = "ru"
            description_separator = "; "

            [labels]
            "app::Phone" = "Телефон"
        "#;

        let result = loader.parse(toml).unwrap();
        assert_eq!(result["description_separator"], "; ");
        assert_eq!(result["labels"]["app::Phone"], "Телефон");
    }

    #[test]
    fn test_parse_env() {
        let loader = ConfigLoader::new(FileFormat::Env);
        let env = r#"
            LOCALE=en
            # Comment
            DESCRIPTION_SEPARATOR="|"
        "#;

        let result = loader.parse(env).unwrap();
        assert_eq!(result["locale"], "en");
        assert_eq!(result["description_separator"], "|");
    }

    #[test]
    fn test_non_table_root_rejected() {
        let loader = ConfigLoader::new(FileFormat::Json);
        assert!(matches!(loader.parse("[1, 2]"), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_extension("json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_extension("TOML"), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_extension("yaml"), None);
        assert_eq!(ConfigLoader::auto("rules.toml").unwrap().format(), FileFormat::Toml);
        assert!(ConfigLoader::auto("rules").is_err());
    }

    #[test]
    fn test_dotenv_file_names() {
        assert_eq!(ConfigLoader::auto(".env").unwrap().format(), FileFormat::Env);
        assert_eq!(ConfigLoader::auto("/srv/app/.env").unwrap().format(), FileFormat::Env);
        assert_eq!(ConfigLoader::auto(".env.local").unwrap().format(), FileFormat::Env);
        assert!(ConfigLoader::auto(".envrc").is_err());
    }
}
