//! Qdrant integration for RAGNav
//!
//! This crate provides the Qdrant implementation of the knowledge store
//! trait: collection bootstrap, item upsert, and scoped hybrid search.

mod config;
mod store;

pub use config::QdrantConfig;
pub use store::QdrantKnowledgeStore;

// Re-export core types for convenience
pub use ragnav_core::{Error, KnowledgeStore, Result, ScoredItem, SearchRequest};
