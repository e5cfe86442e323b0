// Error types for request setup and export configuration

use ruleform_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Validation setup error: {0}")]
    Validation(#[from] ruleform_validation::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RequestError>;
