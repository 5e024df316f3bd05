//! Retrieval-augmented completion pipeline for RAGNav
//!
//! This crate holds the application logic: keyword extraction, the
//! embed-retrieve-synthesize pipeline, and plain-text document ingestion.

mod ingest;
mod keywords;
mod pipeline;


pub use ingest::DocumentIngestor;
pub use keywords::extract_keywords;
pub use pipeline::KnowledgePipeline;

// Re-export core types for convenience
pub use ragnav_core::{
    Completion, CompletionProvider, EmbeddingProvider, Error, KnowledgeBaseItem, KnowledgeQuery,
    KnowledgeStore, PipelineConfig, Result, ScoredItem, SearchRequest, SynthesizedAnswer,
};
