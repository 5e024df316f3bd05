//! Plain-text document ingestion
//!
//! Splits a document into paragraph chunks, embeds each chunk, and upserts
//! the results into the knowledge store. PDF parsing is deliberately not
//! handled here; callers hand over extracted text.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use ragnav_core::{EmbeddingProvider, Error, KnowledgeBaseItem, KnowledgeStore, Result};

const MAX_CHUNK_CHARS: usize = 1000;
const MIN_CHUNK_CHARS: usize = 10;

/// Indexes documents into the knowledge store
pub struct DocumentIngestor<E, S> {
    embedder: Arc<E>,
    store: Arc<S>,
}

impl<E, S> DocumentIngestor<E, S>
where
    E: EmbeddingProvider,
    S: KnowledgeStore,
{
    pub fn new(embedder: Arc<E>, store: Arc<S>) -> Self {
        Self { embedder, store }
    }

    /// Chunk, embed, and upsert one document. Returns the number of chunks
    /// stored.
    pub async fn ingest_text(
        &self,
        tenant_id: &str,
        user_id: &str,
        category_id: &str,
        title: &str,
        text: &str,
    ) -> Result<usize> {
        let chunks = chunk_paragraphs(text);

        if chunks.is_empty() {
            return Err(Error::InvalidInput(
                "document contains no indexable text".to_string(),
            ));
        }

        let total = chunks.len();
        let created_at = chrono::Utc::now().to_rfc3339();
        let mut rows = Vec::with_capacity(total);

        for (index, chunk) in chunks.into_iter().enumerate() {
            let vector = self.embedder.embed(&chunk).await?;

            let item = KnowledgeBaseItem {
                id: chunk_id(tenant_id, user_id, title, index, &chunk),
                tenant_id: tenant_id.to_string(),
                user_id: user_id.to_string(),
                category_id: category_id.to_string(),
                title: format!("{} [{}/{}]", title, index + 1, total),
                text: chunk,
                created_at: created_at.clone(),
            };

            rows.push((item, vector));
        }

        self.store.upsert(rows).await?;
        info!(chunks = total, title, "Document indexed");

        Ok(total)
    }
}

/// Deterministic chunk id: content hash folded into a UUID, so re-ingesting
/// the same document overwrites instead of duplicating.
fn chunk_id(tenant_id: &str, user_id: &str, title: &str, index: usize, chunk: &str) -> String {
    let digest = md5::compute(format!("{}:{}:{}:{}:{}", tenant_id, user_id, title, index, chunk));
    Uuid::from_bytes(digest.0).to_string()
}

/// Split text on blank lines and merge consecutive paragraphs into chunks of
/// at most `MAX_CHUNK_CHARS`. Fragments shorter than `MIN_CHUNK_CHARS` are
/// dropped.
fn chunk_paragraphs(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        if !current.is_empty() && current.len() + paragraph.len() + 2 > MAX_CHUNK_CHARS {
            chunks.push(std::mem::take(&mut current));
        }

        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(paragraph);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks.retain(|chunk| chunk.chars().count() >= MIN_CHUNK_CHARS);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_merge_up_to_the_chunk_limit() {
        let first = "a".repeat(600);
        let second = "b".repeat(600);
        let text = format!("{}\n\n{}", first, second);

        let chunks = chunk_paragraphs(&text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], first);
        assert_eq!(chunks[1], second);
    }

    #[test]
    fn test_small_paragraphs_share_a_chunk() {
        let chunks = chunk_paragraphs("first paragraph here\n\nsecond paragraph here");
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].contains("first paragraph"));
        assert!(chunks[0].contains("second paragraph"));
    }

    #[test]
    fn test_short_fragments_are_dropped() {
        let chunks = chunk_paragraphs("ok\n\n\n\n  \n\n");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_ids_are_deterministic() {
        let a = chunk_id("1234", "5678", "Filing", 0, "some chunk text");
        let b = chunk_id("1234", "5678", "Filing", 0, "some chunk text");
        let c = chunk_id("1234", "5678", "Filing", 1, "some chunk text");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
