//! Core traits and types for RAGNav
//!
//! This crate defines the fundamental traits and types used across the RAGNav
//! system. It provides capability-facing interfaces for embedding and
//! completion providers and for the vector/keyword knowledge store, making
//! the pipeline test-friendly and extensible.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod provider;
pub mod store;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use knowledge::{KnowledgeBaseItem, KnowledgeQuery, SynthesizedAnswer};
pub use provider::{Completion, CompletionProvider, EmbeddingProvider};
pub use store::{KnowledgeStore, ScoredItem, SearchRequest};
