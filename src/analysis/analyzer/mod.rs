//! Analyzer implementations that combine char filters, tokenizers, and
//! token filters.

mod analyzer;
mod pipeline;
mod simple;
mod standard;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use simple::SimpleAnalyzer;
pub use standard::StandardAnalyzer;
