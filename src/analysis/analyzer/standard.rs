//! Standard analyzer implementing the canonical Solace normalization.
//!
//! # Pipeline
//!
//! 1. LettersOnlyCharFilter (lower-case, strip everything outside `[a-z ]`)
//! 2. WhitespaceTokenizer
//! 3. LemmaFilter (POS-aware lemmatization, noun default)
//!
//! This is the analyzer both corpora and every query are normalized with.
//!
//! # Examples
//!
//! ```
//! use solace::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("I'm feeling anxious!").collect();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//!
//! assert_eq!(texts, vec!["im", "feel", "anxious"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::LettersOnlyCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::LemmaFilter;
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// The standard analyzer: letters-only char filtering, whitespace
/// tokenization, and POS-aware lemmatization.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LettersOnlyCharFilter::new()?))
            .add_filter(Arc::new(LemmaFilter::new()))
            .with_name("standard");

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer").field("inner", &self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let tokens: Vec<Token> = analyzer.analyze("How do I stop my worries?").collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["how", "do", "i", "stop", "my", "worry"]);
    }

    #[test]
    fn test_digits_and_punctuation_stripped() {
        let analyzer = StandardAnalyzer::new().unwrap();
        assert_eq!(analyzer.analyze("42!!").count(), 0);
    }
}
