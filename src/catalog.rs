//! Intent catalog and QA table value objects.
//!
//! The engine's two knowledge sources are loaded once at startup and are
//! immutable afterwards:
//!
//! - An **intent catalog**: groups of `{tag, patterns, responses}`. The
//!   catalog is flattened into one [`IntentRecord`] per pattern occurrence;
//!   by explicit rule, only the **first** response of each group is used.
//! - A **QA table**: a flat list of `(question, answer)` pairs.
//!
//! Both sources are validated on construction and rejected with a
//! [`SolaceError::Catalog`](crate::error::SolaceError) if structurally
//! invalid (a group with no patterns or no responses, a row with a blank
//! question or answer). Malformed records fail fast at load time; they
//! never surface as per-query failures or empty response strings.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::Normalizer;
use crate::error::{Result, SolaceError};

/// One intent group from the catalog source: a category label, example
/// phrasings, and candidate reply texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentGroup {
    /// Category label shared by all patterns in the group.
    pub tag: String,
    /// Example phrasings that should map to this intent.
    pub patterns: Vec<String>,
    /// Candidate replies; only the first is used.
    pub responses: Vec<String>,
}

/// One flattened intent record: a single pattern occurrence with its tag and
/// the group's first response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The raw pattern text.
    pub pattern: String,
    /// The pattern in canonical normalized form.
    pub normalized: String,
    /// Category label of the originating group.
    pub tag: String,
    /// The fixed reply text for this intent.
    pub response: String,
}

/// One question/answer record from the QA table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    /// The raw question text.
    pub question: String,
    /// The question in canonical normalized form.
    pub normalized: String,
    /// The fixed answer text.
    pub answer: String,
}

/// A validated, immutable catalog of intent groups.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntentCatalog {
    #[serde(rename = "intents")]
    groups: Vec<IntentGroup>,
}

impl IntentCatalog {
    /// Create an empty catalog (a defined state: every query falls through
    /// to the QA table or the default reply).
    pub fn empty() -> Self {
        IntentCatalog { groups: Vec::new() }
    }

    /// Create a catalog from intent groups, validating each group.
    pub fn from_groups(groups: Vec<IntentGroup>) -> Result<Self> {
        for (index, group) in groups.iter().enumerate() {
            if group.tag.trim().is_empty() {
                return Err(SolaceError::catalog(format!(
                    "intent group {index} has an empty tag"
                )));
            }
            if group.patterns.is_empty() {
                return Err(SolaceError::catalog(format!(
                    "intent group '{}' has no patterns",
                    group.tag
                )));
            }
            if group.responses.is_empty() {
                return Err(SolaceError::catalog(format!(
                    "intent group '{}' has no responses",
                    group.tag
                )));
            }
            if group.patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(SolaceError::catalog(format!(
                    "intent group '{}' contains a blank pattern",
                    group.tag
                )));
            }
            if group.responses[0].trim().is_empty() {
                return Err(SolaceError::catalog(format!(
                    "intent group '{}' has a blank first response",
                    group.tag
                )));
            }
        }
        Ok(IntentCatalog { groups })
    }

    /// Load a catalog from a JSON reader (`{"intents": [...]}`).
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let catalog: IntentCatalog = serde_json::from_reader(reader)?;
        Self::from_groups(catalog.groups)
    }

    /// Load a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// The validated intent groups.
    pub fn groups(&self) -> &[IntentGroup] {
        &self.groups
    }

    /// Check whether the catalog has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Flatten the catalog into one record per pattern occurrence,
    /// normalizing each pattern.
    ///
    /// Records keep the left-to-right order of the catalog scan: groups in
    /// catalog order, patterns in group order. Each record carries the
    /// group's first response.
    pub fn records(&self, normalizer: &Normalizer) -> Vec<IntentRecord> {
        let mut records = Vec::new();
        for group in &self.groups {
            for pattern in &group.patterns {
                records.push(IntentRecord {
                    pattern: pattern.clone(),
                    normalized: normalizer.normalize(pattern),
                    tag: group.tag.clone(),
                    response: group.responses[0].clone(),
                });
            }
        }
        records
    }
}

/// A row of the QA source table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRow {
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
}

/// A validated, immutable table of question/answer pairs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QaTable {
    rows: Vec<QaRow>,
}

impl QaTable {
    /// Create an empty table (a defined state, not an error).
    pub fn empty() -> Self {
        QaTable { rows: Vec::new() }
    }

    /// Create a table from rows, validating each row.
    pub fn from_rows(rows: Vec<QaRow>) -> Result<Self> {
        for (index, row) in rows.iter().enumerate() {
            if row.question.trim().is_empty() {
                return Err(SolaceError::catalog(format!(
                    "QA row {index} has a blank question"
                )));
            }
            if row.answer.trim().is_empty() {
                return Err(SolaceError::catalog(format!(
                    "QA row {index} has a missing or blank answer"
                )));
            }
        }
        Ok(QaTable { rows })
    }

    /// Create a table from `(question, answer)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let rows = pairs
            .into_iter()
            .map(|(question, answer)| QaRow {
                question: question.into(),
                answer: answer.into(),
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Load a table from a JSON reader (an array of
    /// `{"question": ..., "answer": ...}` objects).
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let rows: Vec<QaRow> = serde_json::from_reader(reader)?;
        Self::from_rows(rows)
    }

    /// Load a table from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// The validated rows.
    pub fn rows(&self) -> &[QaRow] {
        &self.rows
    }

    /// Check whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Normalize every question into one record per row, preserving row
    /// order.
    pub fn records(&self, normalizer: &Normalizer) -> Vec<QaRecord> {
        self.rows
            .iter()
            .map(|row| QaRecord {
                question: row.question.clone(),
                normalized: normalizer.normalize(&row.question),
                answer: row.answer.clone(),
            })
            .collect()
    }
}
