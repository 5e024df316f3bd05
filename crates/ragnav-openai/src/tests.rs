//! Snapshot tests for the Azure OpenAI client

#[cfg(test)]
mod snapshot_tests {
    use crate::{AzureOpenAIClient, AzureOpenAIConfig, EmbeddingProvider};
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = AzureOpenAIConfig::new(
            "https://example.openai.azure.com".to_string(),
            "test_api_key_redacted".to_string(),
        );

        assert_yaml_snapshot!(config, @r###"
        endpoint: "https://example.openai.azure.com"
        api_key: test_api_key_redacted
        completion_deployment: gpt-4o
        embedding_deployment: text-embedding-3-large
        api_version: 2024-02-01
        dimensions: 3072
        "###);
    }

    #[test]
    fn test_client_reports_configured_dimensions() {
        let config = AzureOpenAIConfig::new(
            "https://example.openai.azure.com".to_string(),
            "test_key".to_string(),
        );
        let client = AzureOpenAIClient::new(config).unwrap();

        assert_eq!(client.dimensions(), 3072);
    }
}
