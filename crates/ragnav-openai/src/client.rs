//! Azure OpenAI client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use ragnav_core::{
    Completion, CompletionProvider, EmbeddingProvider, Error, KnowledgeBaseItem, Result,
};

use crate::config::AzureOpenAIConfig;

const SYSTEM_PROMPT: &str = "You are a knowledge-base assistant. Answer the user's question using only the provided context item. If the context does not contain the answer, say so.";

/// Azure OpenAI client serving both embeddings and chat completions
pub struct AzureOpenAIClient {
    config: AzureOpenAIConfig,
    client: Client,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    dimensions: usize,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

impl AzureOpenAIClient {
    /// Create a new client from configuration
    pub fn new(config: AzureOpenAIConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = AzureOpenAIConfig::from_env()?;
        Self::new(config)
    }

    fn deployment_url(&self, deployment: &str, operation: &str) -> String {
        format!(
            "{}/openai/deployments/{}/{}?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            deployment,
            operation,
            self.config.api_version
        )
    }

    async fn post_json<Req: Serialize, Resp: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: &Req,
    ) -> Result<Resp> {
        let response = self
            .client
            .post(url)
            .header("api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(e.to_string())
                } else {
                    Error::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Provider(format!(
                "Azure OpenAI request failed with status {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[async_trait]
impl EmbeddingProvider for AzureOpenAIClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let url = self.deployment_url(&self.config.embedding_deployment, "embeddings");
        let request = EmbeddingRequest {
            input: text,
            dimensions: self.config.dimensions,
        };

        let response: EmbeddingResponse = self.post_json(&url, &request).await?;

        let vector = response
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .ok_or_else(|| Error::Provider("embedding response contained no data".to_string()))?;

        if vector.len() != self.config.dimensions {
            return Err(Error::Provider(format!(
                "embedding has {} dimensions, expected {}",
                vector.len(),
                self.config.dimensions
            )));
        }

        debug!(dimensions = vector.len(), "Prompt embedded");
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }
}

#[async_trait]
impl CompletionProvider for AzureOpenAIClient {
    async fn complete(&self, prompt_text: &str, context: &KnowledgeBaseItem) -> Result<Completion> {
        let url = self.deployment_url(&self.config.completion_deployment, "chat/completions");

        let request = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: format!(
                        "{}\n\nContext item \"{}\":\n{}",
                        SYSTEM_PROMPT, context.title, context.text
                    ),
                },
                ChatMessage {
                    role: "user",
                    content: prompt_text.to_string(),
                },
            ],
            temperature: 0.2,
            max_tokens: 1024,
        };

        let response: ChatResponse = self.post_json(&url, &request).await?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Provider("completion response contained no choices".to_string()))?;

        Ok(Completion {
            text,
            tokens_used: response.usage.map(|usage| usage.total_tokens),
        })
    }
}
