//! Knowledge-base item and query types

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An item stored in the knowledge base
///
/// Items are created during ingestion and read-only at query time. The
/// embedding vector lives in the store next to the item and is never read
/// back by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseItem {
    pub id: String,
    pub tenant_id: String,
    pub user_id: String,
    pub category_id: String,
    pub title: String,
    pub text: String,
    pub created_at: String,
}

/// One immutable pipeline invocation
///
/// The similarity threshold is an explicit required field. The original
/// service carried two conflicting internal defaults for it; callers must
/// now always pass one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeQuery {
    pub tenant_id: String,
    pub user_id: String,
    pub category_id: Option<String>,
    pub prompt_text: String,
    pub similarity_threshold: f32,
}

impl KnowledgeQuery {
    /// Validate the query before any provider or store call is made.
    pub fn validate(&self) -> Result<()> {
        if self.tenant_id.trim().is_empty() {
            return Err(Error::InvalidInput("tenant_id must not be empty".to_string()));
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::InvalidInput("user_id must not be empty".to_string()));
        }
        if self.prompt_text.trim().is_empty() {
            return Err(Error::InvalidInput("prompt_text must not be empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::InvalidInput(format!(
                "similarity_threshold must be in [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}

/// Final pipeline output
///
/// `text` is the blank-line-joined concatenation of per-item completions in
/// retrieval order; `title` is the top-ranked item's title, or `None` when
/// nothing was retrieved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizedAnswer {
    pub text: String,
    pub title: Option<String>,
}

impl SynthesizedAnswer {
    /// The "no knowledge found" terminal outcome.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(tenant: &str, user: &str, prompt: &str) -> KnowledgeQuery {
        KnowledgeQuery {
            tenant_id: tenant.to_string(),
            user_id: user.to_string(),
            category_id: Some("Document".to_string()),
            prompt_text: prompt.to_string(),
            similarity_threshold: 0.7,
        }
    }

    #[test]
    fn test_valid_query_passes() {
        assert!(query("1234", "5678", "What are the risk factors?").validate().is_ok());
    }

    #[test]
    fn test_empty_prompt_is_invalid_input() {
        for prompt in ["", "   ", "\t\n"] {
            let err = query("1234", "5678", prompt).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
    }

    #[test]
    fn test_missing_identifiers_are_invalid_input() {
        assert!(matches!(
            query("", "5678", "risk factors").validate().unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            query("1234", " ", "risk factors").validate().unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn test_out_of_range_threshold_is_invalid_input() {
        let mut q = query("1234", "5678", "risk factors");
        q.similarity_threshold = 1.5;
        assert!(matches!(q.validate().unwrap_err(), Error::InvalidInput(_)));

        q.similarity_threshold = -0.1;
        assert!(matches!(q.validate().unwrap_err(), Error::InvalidInput(_)));
    }

    #[test]
    fn test_empty_answer_has_no_title() {
        let answer = SynthesizedAnswer::empty();
        assert_eq!(answer.text, "");
        assert!(answer.title.is_none());
    }
}
