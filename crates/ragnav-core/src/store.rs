//! Knowledge store trait and search types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{KnowledgeBaseItem, Result};

/// One logical hybrid search against the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub vector: Vec<f32>,
    pub tenant_id: String,
    pub user_id: String,
    /// Items match when their category equals this one or when they are
    /// unscoped (empty category). `None` disables category scoping.
    pub category_id: Option<String>,
    pub similarity_threshold: f32,
    /// Soft ranking signal: used to break similarity ties, never as a hard
    /// filter.
    pub keywords: Vec<String>,
    pub max_results: usize,
}

/// A retrieved item with its similarity score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredItem {
    pub item: KnowledgeBaseItem,
    pub score: f32,
}

/// Trait for vector/keyword knowledge stores (e.g. Qdrant)
///
/// Implementations persist items with their embedding vectors and serve
/// scoped similarity queries. Search results are ordered by score
/// descending; an empty result set is a legitimate outcome, not an error.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Create the backing collection if it does not exist yet.
    async fn ensure_collection(&self) -> Result<()>;

    /// Upsert items with their embedding vectors.
    async fn upsert(&self, items: Vec<(KnowledgeBaseItem, Vec<f32>)>) -> Result<()>;

    /// Run one hybrid similarity + keyword search.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<ScoredItem>>;

    /// Total number of stored items.
    async fn count(&self) -> Result<usize>;

    /// Names of all collections on the backing store.
    async fn list_collections(&self) -> Result<Vec<String>>;
}
