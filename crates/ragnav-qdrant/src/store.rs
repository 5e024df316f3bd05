//! Qdrant-backed knowledge store

use async_trait::async_trait;
use qdrant_client::qdrant::{
    Condition, CountPointsBuilder, CreateCollectionBuilder, Distance, Filter, PointStruct,
    SearchPointsBuilder, UpsertPointsBuilder, Value, VectorParamsBuilder, value::Kind,
};
use qdrant_client::{Payload, Qdrant};
use std::cmp::Ordering;
use tracing::{debug, info};

use ragnav_core::{
    Error, KnowledgeBaseItem, KnowledgeStore, Result, ScoredItem, SearchRequest,
};

use crate::config::QdrantConfig;

/// Knowledge store backed by a Qdrant collection
///
/// Items are partitioned by tenant/user/category payload fields; vectors are
/// indexed with cosine distance. Keywords act as a soft ranking signal: the
/// store ranks by similarity descending and keyword overlap only breaks
/// exact score ties, with insertion order as the final stable tie-break.
pub struct QdrantKnowledgeStore {
    client: Qdrant,
    config: QdrantConfig,
}

impl QdrantKnowledgeStore {
    /// Connect to Qdrant with the given configuration
    pub fn new(config: QdrantConfig) -> Result<Self> {
        let client = Qdrant::from_url(&config.url)
            .build()
            .map_err(|e| Error::Store(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn scope_filter(&self, request: &SearchRequest) -> Filter {
        let mut must = vec![
            Condition::matches("tenant_id", request.tenant_id.clone()),
            Condition::matches("user_id", request.user_id.clone()),
        ];

        // An item matches the requested category or is unscoped (empty
        // category).
        if let Some(category) = &request.category_id {
            must.push(Condition::from(Filter::should([
                Condition::matches("category_id", category.clone()),
                Condition::matches("category_id", String::new()),
            ])));
        }

        Filter::must(must)
    }
}

#[async_trait]
impl KnowledgeStore for QdrantKnowledgeStore {
    async fn ensure_collection(&self) -> Result<()> {
        let exists = self
            .client
            .collection_exists(&self.config.collection)
            .await
            .map_err(|e| Error::Store(e.to_string()))?;

        if !exists {
            self.client
                .create_collection(
                    CreateCollectionBuilder::new(&self.config.collection).vectors_config(
                        VectorParamsBuilder::new(
                            self.config.embedding_dimensions as u64,
                            Distance::Cosine,
                        ),
                    ),
                )
                .await
                .map_err(|e| Error::Store(e.to_string()))?;

            info!(collection = %self.config.collection, "Created Qdrant collection");
        }

        Ok(())
    }

    async fn upsert(&self, items: Vec<(KnowledgeBaseItem, Vec<f32>)>) -> Result<()> {
        let mut points = Vec::with_capacity(items.len());

        for (item, vector) in items {
            if vector.len() != self.config.embedding_dimensions {
                return Err(Error::Store(format!(
                    "item {} has a {}-dimensional vector, collection expects {}",
                    item.id,
                    vector.len(),
                    self.config.embedding_dimensions
                )));
            }

            let id = item.id.clone();
            points.push(PointStruct::new(id, vector, item_to_payload(&item)?));
        }

        let count = points.len();
        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.config.collection, points).wait(true))
            .await
            .map_err(|e| Error::Store(e.to_string()))?;

        debug!(count, "Upserted knowledge base items");
        Ok(())
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<ScoredItem>> {
        let search = SearchPointsBuilder::new(
            &self.config.collection,
            request.vector.clone(),
            request.max_results as u64,
        )
        .filter(self.scope_filter(request))
        .score_threshold(request.similarity_threshold)
        .with_payload(true);

        let response = self
            .client
            .search_points(search)
            .await
            .map_err(|e| Error::Store(e.to_string()))?;

        let mut results = Vec::with_capacity(response.result.len());
        for point in response.result {
            let item = payload_to_item(point.payload)?;
            results.push(ScoredItem {
                item,
                score: point.score,
            });
        }

        debug!(count = results.len(), "Search returned items");
        Ok(rerank_with_keywords(results, &request.keywords))
    }

    async fn count(&self) -> Result<usize> {
        let response = self
            .client
            .count(CountPointsBuilder::new(&self.config.collection).exact(true))
            .await
            .map_err(|e| Error::Store(e.to_string()))?;

        Ok(response.result.map(|r| r.count as usize).unwrap_or(0))
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .list_collections()
            .await
            .map_err(|e| Error::Store(e.to_string()))?;

        Ok(response
            .collections
            .into_iter()
            .map(|collection| collection.name)
            .collect())
    }
}

fn item_to_payload(item: &KnowledgeBaseItem) -> Result<Payload> {
    let value = serde_json::to_value(item).map_err(|e| Error::Serialization(e.to_string()))?;
    Payload::try_from(value).map_err(|e| Error::Serialization(e.to_string()))
}

fn payload_to_item(
    payload: std::collections::HashMap<String, Value>,
) -> Result<KnowledgeBaseItem> {
    let object = payload
        .into_iter()
        .map(|(key, value)| (key, qdrant_value_to_json(value)))
        .collect();

    serde_json::from_value(serde_json::Value::Object(object))
        .map_err(|e| Error::Serialization(e.to_string()))
}

fn qdrant_value_to_json(value: Value) -> serde_json::Value {
    match value.kind {
        Some(Kind::StringValue(s)) => serde_json::Value::String(s),
        Some(Kind::IntegerValue(i)) => serde_json::Value::from(i),
        Some(Kind::DoubleValue(d)) => serde_json::Value::from(d),
        Some(Kind::BoolValue(b)) => serde_json::Value::Bool(b),
        Some(Kind::ListValue(list)) => serde_json::Value::Array(
            list.values.into_iter().map(qdrant_value_to_json).collect(),
        ),
        Some(Kind::StructValue(object)) => serde_json::Value::Object(
            object
                .fields
                .into_iter()
                .map(|(key, value)| (key, qdrant_value_to_json(value)))
                .collect(),
        ),
        Some(Kind::NullValue(_)) | None => serde_json::Value::Null,
    }
}

/// Stable re-rank: similarity descending stays the primary order; keyword
/// overlap breaks exact score ties, original order breaks the rest.
fn rerank_with_keywords(results: Vec<ScoredItem>, keywords: &[String]) -> Vec<ScoredItem> {
    if keywords.is_empty() || results.len() < 2 {
        return results;
    }

    let mut indexed: Vec<(usize, usize, ScoredItem)> = results
        .into_iter()
        .enumerate()
        .map(|(index, scored)| (index, keyword_overlap(&scored.item, keywords), scored))
        .collect();

    indexed.sort_by(|(index_a, overlap_a, a), (index_b, overlap_b, b)| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| overlap_b.cmp(overlap_a))
            .then_with(|| index_a.cmp(index_b))
    });

    indexed.into_iter().map(|(_, _, scored)| scored).collect()
}

fn keyword_overlap(item: &KnowledgeBaseItem, keywords: &[String]) -> usize {
    let haystack = format!("{} {}", item.title, item.text).to_lowercase();
    keywords
        .iter()
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .count()
}
