//! Text normalization facade.
//!
//! A [`Normalizer`] runs an analyzer over raw text and joins the resulting
//! lemmas into a canonical, single-space-separated token string. This is the
//! form both corpora are indexed under and every query is matched in, and it
//! is also exposed directly for callers that need raw normalization (for
//! example offline corpus re-indexing).
//!
//! # Examples
//!
//! ```
//! use solace::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::standard().unwrap();
//!
//! assert_eq!(normalizer.normalize("I was FEELING anxious!"), "i be feel anxious");
//! assert_eq!(normalizer.normalize("12345 !?"), "");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, SimpleAnalyzer, StandardAnalyzer};
use crate::error::Result;

/// Normalizes raw text into a canonical token string.
///
/// Normalization is pure, deterministic, and total: any input string yields
/// a (possibly empty) token string, never an error. Output in canonical
/// form normalizes to itself.
#[derive(Clone)]
pub struct Normalizer {
    analyzer: Arc<dyn Analyzer>,
}

impl Normalizer {
    /// Create a normalizer over a custom analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Normalizer { analyzer }
    }

    /// Create the standard normalizer (letters-only, whitespace,
    /// POS-aware lemmatization).
    pub fn standard() -> Result<Self> {
        Ok(Normalizer::new(Arc::new(StandardAnalyzer::new()?)))
    }

    /// Create a normalizer that only splits on whitespace.
    ///
    /// Useful for synthetic corpora where term overlap must be controlled
    /// exactly.
    pub fn simple() -> Self {
        Normalizer::new(Arc::new(SimpleAnalyzer::whitespace()))
    }

    /// Normalize raw text into a canonical token string.
    ///
    /// Empty or fully-stripped input yields the empty string.
    pub fn normalize(&self, text: &str) -> String {
        let lemmas: Vec<String> = self.analyzer.analyze(text).map(|t| t.text).collect();
        lemmas.join(" ")
    }

    /// Get the underlying analyzer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
