//! Embedding and completion provider traits

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{KnowledgeBaseItem, Result};

/// A single generated completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub tokens_used: Option<u32>,
}

/// Trait for embedding providers
///
/// Turns text into a fixed-length vector for similarity comparison. Each
/// call re-embeds; implementations must not cache.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed text into a vector of `dimensions()` floats.
    ///
    /// A provider returning a vector of the wrong length is an error that
    /// must propagate, never be silently corrected.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embedding dimensionality this provider is configured for.
    fn dimensions(&self) -> usize;
}

/// Trait for completion providers
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for `prompt_text` grounded on a single
    /// knowledge-base item.
    ///
    /// Calls are stateless with respect to each other: no shared
    /// conversation history, no accumulation of prior answers.
    async fn complete(&self, prompt_text: &str, context: &KnowledgeBaseItem) -> Result<Completion>;
}
