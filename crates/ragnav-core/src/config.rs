//! Pipeline configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::{Error, Result};

/// Configuration for the knowledge pipeline
///
/// Built once at process start and passed into the pipeline constructor;
/// the pipeline itself performs no environment lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Embedding dimensionality the store's collection is indexed with.
    pub embedding_dimensions: usize,
    /// Maximum number of items one retrieval may return.
    pub max_results: usize,
    /// Threshold the CLI supplies when the caller gives none. The pipeline
    /// never falls back to this on its own; queries carry an explicit
    /// threshold.
    pub default_similarity_threshold: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            embedding_dimensions: 3072,
            max_results: 10,
            default_similarity_threshold: 0.7,
        }
    }
}

impl PipelineConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            embedding_dimensions: parse_var(
                "RAGNAV_EMBEDDING_DIMENSIONS",
                defaults.embedding_dimensions,
            )?,
            max_results: parse_var("RAGNAV_MAX_RESULTS", defaults.max_results)?,
            default_similarity_threshold: parse_var(
                "RAGNAV_SIMILARITY_THRESHOLD",
                defaults.default_similarity_threshold,
            )?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| Error::Configuration(format!("{} has an invalid value: {}", name, value))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_default_config_snapshot() {
        let config = PipelineConfig::default();

        assert_yaml_snapshot!(config, @r###"
        ---
        embedding_dimensions: 3072
        max_results: 10
        default_similarity_threshold: 0.7
        "###);
    }
}
