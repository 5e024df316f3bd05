//! Azure OpenAI configuration

use serde::{Deserialize, Serialize};
use std::env;

use ragnav_core::{Error, Result};

/// Configuration for the Azure OpenAI client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureOpenAIConfig {
    pub endpoint: String,
    pub api_key: String,
    pub completion_deployment: String,
    pub embedding_deployment: String,
    pub api_version: String,
    pub dimensions: usize,
}

impl AzureOpenAIConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let endpoint = env::var("AZURE_OPENAI_ENDPOINT").map_err(|_| {
            Error::Configuration("AZURE_OPENAI_ENDPOINT environment variable not found".to_string())
        })?;

        let api_key = env::var("AZURE_OPENAI_KEY").map_err(|_| {
            Error::Configuration("AZURE_OPENAI_KEY environment variable not found".to_string())
        })?;

        let completion_deployment = env::var("AZURE_OPENAI_COMPLETION_DEPLOYMENT_NAME")
            .unwrap_or_else(|_| "gpt-4o".to_string());

        let embedding_deployment = env::var("AZURE_OPENAI_EMBEDDING_DEPLOYMENT_NAME")
            .unwrap_or_else(|_| "text-embedding-3-large".to_string());

        let api_version =
            env::var("AZURE_OPENAI_API_VERSION").unwrap_or_else(|_| "2024-02-01".to_string());

        let dimensions = match env::var("RAGNAV_EMBEDDING_DIMENSIONS") {
            Ok(value) => value.parse().map_err(|_| {
                Error::Configuration(format!(
                    "RAGNAV_EMBEDDING_DIMENSIONS has an invalid value: {}",
                    value
                ))
            })?,
            Err(_) => 3072,
        };

        Ok(Self {
            endpoint,
            api_key,
            completion_deployment,
            embedding_deployment,
            api_version,
            dimensions,
        })
    }

    /// Create configuration with explicit values
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            completion_deployment: "gpt-4o".to_string(),
            embedding_deployment: "text-embedding-3-large".to_string(),
            api_version: "2024-02-01".to_string(),
            dimensions: 3072,
        }
    }
}
