//! Keyword extraction from free-text prompts

use ragnav_core::{Error, Result};

const DELIMITERS: [char; 9] = [' ', ',', '.', ';', ':', '\n', '\t', '!', '?'];

/// Extract a deduplicated set of significant search terms from free text.
///
/// Tokens are split on a fixed delimiter set, trimmed, lowercased,
/// deduplicated, and dropped when 2 characters or shorter. First-occurrence
/// order is kept but carries no meaning. Deterministic, no side effects.
pub fn extract_keywords(text: &str) -> Result<Vec<String>> {
    if text.trim().is_empty() {
        return Err(Error::InvalidInput(
            "prompt text must not be empty".to_string(),
        ));
    }

    let mut terms: Vec<String> = Vec::new();

    for token in text.split(DELIMITERS) {
        let term = token.trim().to_lowercase();
        if term.chars().count() > 2 && !terms.contains(&term) {
            terms.push(term);
        }
    }

    Ok(terms)
}
