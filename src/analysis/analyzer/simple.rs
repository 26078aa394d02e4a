//! Simple analyzer that performs tokenization without filtering.
//!
//! This analyzer applies only tokenization. It is useful for tests and
//! callers that need raw term splitting with no normalization, for example
//! when building synthetic corpora with exactly controlled term overlap.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use solace::analysis::analyzer::{Analyzer, SimpleAnalyzer};
//! use solace::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = SimpleAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
//! let tokens: Vec<_> = analyzer.analyze("Hello World").collect();
//!
//! // No filtering applied - original case preserved
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "World");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// A simple analyzer that just tokenizes without any filtering.
#[derive(Clone)]
pub struct SimpleAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
}

impl SimpleAnalyzer {
    /// Create a new simple analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        SimpleAnalyzer { tokenizer }
    }

    /// Create a simple analyzer that splits on whitespace.
    pub fn whitespace() -> Self {
        SimpleAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}

impl Analyzer for SimpleAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.tokenizer.tokenize(text)
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

impl std::fmt::Debug for SimpleAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}
