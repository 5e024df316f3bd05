//! Qdrant connection configuration

use serde::{Deserialize, Serialize};
use std::env;

use ragnav_core::Result;

/// Configuration for the Qdrant knowledge store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QdrantConfig {
    pub url: String,
    pub collection: String,
    pub embedding_dimensions: usize,
}

impl QdrantConfig {
    /// Create configuration from environment variables
    pub fn from_env(embedding_dimensions: usize) -> Result<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("QDRANT_URL").unwrap_or_else(|_| "http://localhost:6334".to_string());
        let collection =
            env::var("QDRANT_COLLECTION").unwrap_or_else(|_| "knowledge_base".to_string());

        Ok(Self {
            url,
            collection,
            embedding_dimensions,
        })
    }

    /// Create configuration with explicit values
    pub fn new(url: String, collection: String, embedding_dimensions: usize) -> Self {
        Self {
            url,
            collection,
            embedding_dimensions,
        }
    }
}
