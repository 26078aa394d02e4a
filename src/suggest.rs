//! Substring autocomplete over the raw corpora.
//!
//! The suggestion index is independent of vectorization: it scans the raw
//! (non-normalized) intent patterns first, then the QA questions, testing
//! case-insensitive substring containment and collecting matches in scan
//! order until the limit is reached. There is no deduplication and no
//! relevance ranking beyond scan order; this is a simple pre-filter for
//! autocomplete, not the retrieval engine.

use crate::catalog::{IntentRecord, QaRecord};

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Case-insensitive substring lookup over the union of both corpora's raw
/// text.
///
/// Immutable after construction; `suggest` takes `&self` and is safe for
/// unlimited concurrent use.
#[derive(Debug, Clone, Default)]
pub struct SuggestionIndex {
    /// Raw candidate texts: intent patterns first, then QA questions.
    entries: Vec<String>,
}

impl SuggestionIndex {
    /// Build the index from flattened records, preserving scan order
    /// (intent patterns before QA questions).
    pub fn new(intents: &[IntentRecord], qa: &[QaRecord]) -> Self {
        let entries = intents
            .iter()
            .map(|record| record.pattern.clone())
            .chain(qa.iter().map(|record| record.question.clone()))
            .collect();
        SuggestionIndex { entries }
    }

    /// Return up to `limit` candidate texts containing `query` as a
    /// case-insensitive substring, in scan order.
    ///
    /// An empty query returns an empty list immediately, without scanning.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut suggestions = Vec::new();

        for entry in &self.entries {
            if entry.to_lowercase().contains(&needle) {
                suggestions.push(entry.clone());
                if suggestions.len() >= limit {
                    break;
                }
            }
        }

        suggestions
    }

    /// Number of candidate texts in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the index has no candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(patterns: &[&str], questions: &[&str]) -> SuggestionIndex {
        let intents: Vec<IntentRecord> = patterns
            .iter()
            .map(|p| IntentRecord {
                pattern: p.to_string(),
                normalized: String::new(),
                tag: "t".to_string(),
                response: "r".to_string(),
            })
            .collect();
        let qa: Vec<QaRecord> = questions
            .iter()
            .map(|q| QaRecord {
                question: q.to_string(),
                normalized: String::new(),
                answer: "a".to_string(),
            })
            .collect();
        SuggestionIndex::new(&intents, &qa)
    }

    #[test]
    fn test_scan_order_intents_before_qa() {
        let index = index(&["I feel sad", "I feel anxious"], &["sad today", "happy news"]);
        assert_eq!(index.suggest("sad", 5), vec!["I feel sad", "sad today"]);
    }

    #[test]
    fn test_limit_stops_scan() {
        let index = index(&["I feel sad", "I feel anxious"], &["sad today", "happy news"]);
        assert_eq!(index.suggest("sad", 1), vec!["I feel sad"]);
    }

    #[test]
    fn test_case_insensitive() {
        let index = index(&["I feel SAD"], &[]);
        assert_eq!(index.suggest("sad", 5), vec!["I feel SAD"]);
        assert_eq!(index.suggest("SAD", 5), vec!["I feel SAD"]);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let index = index(&["I feel sad"], &[]);
        assert!(index.suggest("", 5).is_empty());
    }

    #[test]
    fn test_zero_limit_returns_nothing() {
        let index = index(&["I feel sad"], &[]);
        assert!(index.suggest("sad", 0).is_empty());
    }

    #[test]
    fn test_no_deduplication() {
        let index = index(&["sad", "sad"], &["sad"]);
        assert_eq!(index.suggest("sad", 5), vec!["sad", "sad", "sad"]);
    }

    #[test]
    fn test_no_match() {
        let index = index(&["I feel sad"], &["what is stress"]);
        assert!(index.suggest("zzz", 5).is_empty());
    }
}
