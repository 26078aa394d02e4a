//! Two-tier retrieval matcher over the intent and QA vector spaces.
//!
//! The matcher normalizes a query once, scores it by cosine similarity
//! against both corpora, and applies a fixed fallback policy:
//!
//! 1. If the best intent score is below the confidence floor (0.2), the QA
//!    table is consulted and its best match wins if it scores higher.
//! 2. An intent match is accepted only above the minimum score (0.1);
//!    likewise for a QA match when no intents are loaded.
//! 3. Anything else falls through to the fixed default reply at score 0.0.
//!
//! Both thresholds are policy constants, not derived values. Matching is
//! pure and total: it performs no I/O and never fails, for any input
//! string. Empty corpora are normal branches, not errors.

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::Normalizer;
use crate::catalog::{IntentRecord, QaRecord};
use crate::vector_space::VectorSpace;

/// Minimum best-intent cosine score below which the QA table is consulted.
pub const INTENT_CONFIDENCE_FLOOR: f64 = 0.2;

/// Minimum acceptable cosine score for a match from either source.
/// Comparison is strict: a score of exactly 0.1 is rejected.
pub const MIN_MATCH_SCORE: f64 = 0.1;

/// Fixed reply returned when no source clears the thresholds.
pub const DEFAULT_RESPONSE: &str = "I'm sorry, I don't have information on that topic. \
     Please try asking something about mental health.";

/// A selected reply: verbatim catalog text plus its cosine score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// The reply text, selected verbatim from a catalog.
    pub text: String,
    /// Cosine similarity of the winning document, 0.0 for the default reply.
    pub score: f64,
}

impl Reply {
    fn default_reply() -> Self {
        Reply {
            text: DEFAULT_RESPONSE.to_string(),
            score: 0.0,
        }
    }
}

/// Scores queries against the intent and QA corpora and selects one reply.
///
/// Holds only frozen state; `reply` takes `&self` and is safe for unlimited
/// concurrent use.
#[derive(Debug)]
pub struct Matcher {
    normalizer: Normalizer,
    intents: Vec<IntentRecord>,
    intent_space: VectorSpace,
    qa: Vec<QaRecord>,
    qa_space: VectorSpace,
}

impl Matcher {
    /// Build a matcher over pre-normalized intent and QA records.
    ///
    /// Both vector spaces are constructed here, before any query is served.
    pub fn new(normalizer: Normalizer, intents: Vec<IntentRecord>, qa: Vec<QaRecord>) -> Self {
        let intent_documents: Vec<String> =
            intents.iter().map(|r| r.normalized.clone()).collect();
        let qa_documents: Vec<String> = qa.iter().map(|r| r.normalized.clone()).collect();

        Matcher {
            normalizer,
            intents,
            intent_space: VectorSpace::build(&intent_documents),
            qa,
            qa_space: VectorSpace::build(&qa_documents),
        }
    }

    /// Select the best reply for a raw query.
    ///
    /// Never fails; returns the default reply at score 0.0 when nothing
    /// clears the thresholds (including for empty corpora and queries that
    /// normalize to nothing).
    pub fn reply(&self, query: &str) -> Reply {
        let normalized = self.normalizer.normalize(query);

        if let Some((intent_index, intent_score)) = self.best_intent(&normalized) {
            if intent_score < INTENT_CONFIDENCE_FLOOR {
                if let Some((qa_index, qa_score)) = self.best_qa(&normalized) {
                    if qa_score > intent_score {
                        return Reply {
                            text: self.qa[qa_index].answer.clone(),
                            score: qa_score,
                        };
                    }
                }
            }
            if intent_score > MIN_MATCH_SCORE {
                return Reply {
                    text: self.intents[intent_index].response.clone(),
                    score: intent_score,
                };
            }
        } else if let Some((qa_index, qa_score)) = self.best_qa(&normalized) {
            if qa_score > MIN_MATCH_SCORE {
                return Reply {
                    text: self.qa[qa_index].answer.clone(),
                    score: qa_score,
                };
            }
        }

        Reply::default_reply()
    }

    fn best_intent(&self, normalized: &str) -> Option<(usize, f64)> {
        let query_vector = self.intent_space.project(normalized);
        self.intent_space.best_match(&query_vector)
    }

    fn best_qa(&self, normalized: &str) -> Option<(usize, f64)> {
        let query_vector = self.qa_space.project(normalized);
        self.qa_space.best_match(&query_vector)
    }

    /// The normalizer used for queries and corpora.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// The flattened intent records, in catalog scan order.
    pub fn intents(&self) -> &[IntentRecord] {
        &self.intents
    }

    /// The QA records, in table order.
    pub fn qa(&self) -> &[QaRecord] {
        &self.qa
    }
}
