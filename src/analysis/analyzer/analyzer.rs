//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in Solace. Analyzers combine char filters, a tokenizer, and
//! token filters to transform raw text into a canonical token stream.
//!
//! # Role in the pipeline
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! Analysis is total: every fallible step (regex compilation, pipeline
//! configuration) happens when the analyzer is constructed, so `analyze`
//! itself can never fail, for any input string.

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so analyzers can be shared freely across
/// request-handling threads; implementations hold only immutable state.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This runs the complete analysis pipeline. Empty or fully-stripped
    /// input yields an empty stream, never an error.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
