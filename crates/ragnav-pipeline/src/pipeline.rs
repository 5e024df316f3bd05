//! The retrieval-augmented completion pipeline

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info};

use ragnav_core::{
    CompletionProvider, EmbeddingProvider, Error, KnowledgeQuery, KnowledgeStore, PipelineConfig,
    Result, ScoredItem, SearchRequest, SynthesizedAnswer,
};

use crate::keywords::extract_keywords;

/// End-to-end knowledge-base completion pipeline
///
/// One invocation runs embed + keyword extraction, one hybrid retrieval,
/// then one independent completion per retrieved item. Invocations share no
/// mutable state.
pub struct KnowledgePipeline<E, C, S> {
    embedder: Arc<E>,
    completer: Arc<C>,
    store: Arc<S>,
    config: PipelineConfig,
}

impl<E, C, S> KnowledgePipeline<E, C, S>
where
    E: EmbeddingProvider,
    C: CompletionProvider,
    S: KnowledgeStore,
{
    pub fn new(embedder: Arc<E>, completer: Arc<C>, store: Arc<S>, config: PipelineConfig) -> Self {
        Self {
            embedder,
            completer,
            store,
            config,
        }
    }

    /// Answer a query end to end.
    ///
    /// Stages run in strict sequence: keyword extraction and embedding both
    /// complete before retrieval, retrieval before synthesis. An empty
    /// retrieval is the "no knowledge found" outcome and returns an empty
    /// answer without any completion call.
    pub async fn answer(&self, query: &KnowledgeQuery) -> Result<SynthesizedAnswer> {
        query.validate()?;

        let keywords = extract_keywords(&query.prompt_text)?;
        debug!(count = keywords.len(), "Keywords extracted from the prompt");

        let vector = self.embed_prompt(&query.prompt_text).await?;
        info!("Embeddings generated for the prompt");

        let items = self.retrieve(query, vector, keywords).await?;

        if items.is_empty() {
            info!("No similar knowledge base items found");
            return Ok(SynthesizedAnswer::empty());
        }

        self.synthesize(query, &items).await
    }

    /// Race the pipeline against a cancellation signal.
    ///
    /// Cancellation at any await point aborts the remaining stages; no
    /// partial answer is returned.
    pub async fn answer_with_cancel(
        &self,
        query: &KnowledgeQuery,
        cancel: impl Future<Output = ()>,
    ) -> Result<SynthesizedAnswer> {
        tokio::select! {
            result = self.answer(query) => result,
            _ = cancel => Err(Error::Cancelled),
        }
    }

    async fn embed_prompt(&self, text: &str) -> Result<Vec<f32>> {
        let vector = self.embedder.embed(text).await?;

        if vector.len() != self.config.embedding_dimensions {
            return Err(Error::Provider(format!(
                "embedding has {} dimensions, expected {}",
                vector.len(),
                self.config.embedding_dimensions
            )));
        }

        Ok(vector)
    }

    async fn retrieve(
        &self,
        query: &KnowledgeQuery,
        vector: Vec<f32>,
        keywords: Vec<String>,
    ) -> Result<Vec<ScoredItem>> {
        let request = SearchRequest {
            vector,
            tenant_id: query.tenant_id.clone(),
            user_id: query.user_id.clone(),
            category_id: query.category_id.clone(),
            similarity_threshold: query.similarity_threshold,
            keywords,
            max_results: self.config.max_results,
        };

        self.store.search(&request).await
    }

    /// One independent completion per item, joined with a blank line in
    /// retrieval order; the title comes from the top-ranked item. Any single
    /// completion failure aborts the whole operation.
    async fn synthesize(
        &self,
        query: &KnowledgeQuery,
        items: &[ScoredItem],
    ) -> Result<SynthesizedAnswer> {
        let mut completions = Vec::with_capacity(items.len());

        for scored in items {
            debug!(title = %scored.item.title, score = scored.score, "Processing item");

            let completion = self
                .completer
                .complete(&query.prompt_text, &scored.item)
                .await?;

            completions.push(completion.text);
        }

        info!(
            count = completions.len(),
            "Completion generated for all knowledge base items"
        );

        Ok(SynthesizedAnswer {
            text: completions.join("\n\n"),
            title: items.first().map(|scored| scored.item.title.clone()),
        })
    }
}
