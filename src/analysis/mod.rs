//! Text analysis module for Solace.
//!
//! This module provides the normalization pipeline that turns raw query text
//! into a canonical token sequence: char filtering, tokenization, and
//! POS-aware lemmatization, assembled into analyzers.

pub mod analyzer;
pub mod char_filter;
pub mod lemmatizer;
pub mod normalizer;
pub mod pos;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, SimpleAnalyzer, StandardAnalyzer};
pub use lemmatizer::{LemmaPos, Lemmatizer};
pub use normalizer::Normalizer;
pub use pos::{PosTag, PosTagger};
pub use token::{Token, TokenStream};
