//! The Solace engine: startup construction and the exposed operations.
//!
//! [`Engine::new`] performs all one-time construction — normalizing both
//! corpora, building both vector spaces, and building the suggestion index —
//! before any query can be served. The sources are passed in by value
//! (constructor injection): there are no module-level globals, and the
//! engine is trivially testable with synthetic corpora.
//!
//! After construction the engine is frozen. All three operations take
//! `&self`, touch no shared mutable state, and are safe for unlimited
//! concurrent invocation without locking:
//!
//! - [`reply`](Engine::reply): select the closest canned response
//! - [`suggest`](Engine::suggest): substring autocomplete candidates
//! - [`normalize`](Engine::normalize): raw text normalization
//!
//! The caller owns everything around this: persistence of (query, reply)
//! history, authentication, timeouts, and any wire or file format.

use crate::analysis::normalizer::Normalizer;
use crate::catalog::{IntentCatalog, QaTable};
use crate::error::Result;
use crate::matcher::{Matcher, Reply};
use crate::suggest::{DEFAULT_SUGGESTION_LIMIT, SuggestionIndex};

/// The retrieval engine over one intent catalog and one QA table.
pub struct Engine {
    matcher: Matcher,
    suggestions: SuggestionIndex,
}

impl Engine {
    /// Build an engine with the standard normalization pipeline.
    ///
    /// Fails only on construction problems (analyzer setup); both sources
    /// have already been validated by their constructors. Empty sources are
    /// accepted and yield the default reply for every query.
    pub fn new(catalog: IntentCatalog, table: QaTable) -> Result<Self> {
        Self::with_normalizer(Normalizer::standard()?, catalog, table)
    }

    /// Build an engine with a custom normalizer.
    pub fn with_normalizer(
        normalizer: Normalizer,
        catalog: IntentCatalog,
        table: QaTable,
    ) -> Result<Self> {
        let intents = catalog.records(&normalizer);
        let qa = table.records(&normalizer);
        let suggestions = SuggestionIndex::new(&intents, &qa);
        let matcher = Matcher::new(normalizer, intents, qa);

        Ok(Engine {
            matcher,
            suggestions,
        })
    }

    /// Select the closest canned response for a raw query.
    ///
    /// Total over all input strings; the result is an immutable value with
    /// `score` in [0, 1].
    pub fn reply(&self, query: &str) -> Reply {
        self.matcher.reply(query)
    }

    /// Return up to `limit` autocomplete candidates for a raw query prefix
    /// or fragment.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        self.suggestions.suggest(query, limit)
    }

    /// Return autocomplete candidates with the default limit.
    pub fn suggest_default(&self, query: &str) -> Vec<String> {
        self.suggest(query, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Normalize raw text into the canonical token string used for
    /// matching.
    pub fn normalize(&self, text: &str) -> String {
        self.matcher.normalizer().normalize(text)
    }

    /// The underlying matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The underlying suggestion index.
    pub fn suggestion_index(&self) -> &SuggestionIndex {
        &self.suggestions
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("intents", &self.matcher.intents().len())
            .field("qa", &self.matcher.qa().len())
            .field("suggestion_entries", &self.suggestions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IntentGroup;
    use crate::matcher::DEFAULT_RESPONSE;

    fn sample_engine() -> Engine {
        let catalog = IntentCatalog::from_groups(vec![
            IntentGroup {
                tag: "sadness".to_string(),
                patterns: vec!["I feel sad".to_string(), "I am unhappy".to_string()],
                responses: vec!["I'm sorry you're feeling this way.".to_string()],
            },
            IntentGroup {
                tag: "anxiety".to_string(),
                patterns: vec!["I feel anxious".to_string()],
                responses: vec!["Let's take a slow breath together.".to_string()],
            },
        ])
        .unwrap();
        let table = QaTable::from_pairs(vec![(
            "what is depression",
            "Depression is a mood disorder that affects how you feel.",
        )])
        .unwrap();

        Engine::new(catalog, table).unwrap()
    }

    #[test]
    fn test_reply_selects_matching_intent() {
        let engine = sample_engine();
        let reply = engine.reply("i feel very sad");
        assert_eq!(reply.text, "I'm sorry you're feeling this way.");
        assert!(reply.score > 0.1);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_default_reply_for_unrelated_query() {
        let engine = sample_engine();
        let reply = engine.reply("recommend me a pizza topping");
        assert_eq!(reply.text, DEFAULT_RESPONSE);
        assert_eq!(reply.score, 0.0);
    }

    #[test]
    fn test_normalize_exposed() {
        let engine = sample_engine();
        assert_eq!(engine.normalize("I WAS feeling sad!"), "i be feel sad");
    }

    #[test]
    fn test_suggest_exposed() {
        let engine = sample_engine();
        assert_eq!(
            engine.suggest_default("feel"),
            vec!["I feel sad", "I feel anxious"]
        );
    }
}
