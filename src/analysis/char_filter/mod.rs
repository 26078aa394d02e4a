//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it is passed to the
//! tokenizer. The canonical Solace pipeline uses a single char filter that
//! lower-cases the input and deletes every character outside `a-z` and space.

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the transformed text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual char filter modules
pub mod letters_only;

// Re-export all char filters for convenient access
pub use letters_only::LettersOnlyCharFilter;
