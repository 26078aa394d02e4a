//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use whitespace::WhitespaceTokenizer;
