//! Azure OpenAI integration for RAGNav
//!
//! This crate provides the Azure OpenAI implementation of the embedding and
//! completion provider traits.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::AzureOpenAIClient;
pub use config::AzureOpenAIConfig;

// Re-export core types for convenience
pub use ragnav_core::{Completion, CompletionProvider, EmbeddingProvider, Error, Result};
