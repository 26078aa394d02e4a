//! # Solace
//!
//! A retrieval-based support chatbot engine for mental health queries.
//!
//! Solace answers free-text questions by retrieving the closest canned
//! response from two knowledge sources: a tagged intent-pattern catalog and a
//! flat question/answer table. Queries are normalized through a text-analysis
//! pipeline, projected into bag-of-words vector spaces built over each
//! corpus, and scored by cosine similarity with a two-tier fallback policy.
//!
//! ## Features
//!
//! - Text-analysis pipeline (char filters, tokenizer, POS-aware lemmatization)
//! - Bag-of-words vector spaces with cosine-similarity scoring
//! - Two-tier intent/QA fallback matching with fixed confidence thresholds
//! - Substring autocomplete suggestions over the raw corpora
//! - Pure, lock-free query operations safe for concurrent use
//!
//! ## Example
//!
//! ```
//! use solace::catalog::{IntentCatalog, IntentGroup, QaTable};
//! use solace::engine::Engine;
//!
//! let catalog = IntentCatalog::from_groups(vec![IntentGroup {
//!     tag: "greeting".to_string(),
//!     patterns: vec!["hello".to_string(), "hi there".to_string()],
//!     responses: vec!["Hello! How are you feeling today?".to_string()],
//! }])
//! .unwrap();
//!
//! let engine = Engine::new(catalog, QaTable::empty()).unwrap();
//! let reply = engine.reply("hello");
//!
//! assert_eq!(reply.text, "Hello! How are you feeling today?");
//! assert!(reply.score > 0.1);
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod suggest;
pub mod vector_space;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
