//! Bag-of-words vector space over a corpus of normalized documents.
//!
//! A [`VectorSpace`] freezes a vocabulary and a term-frequency matrix at
//! build time, then projects normalized queries into the same vocabulary for
//! cosine-similarity scoring.
//!
//! Two rules here are deliberate policy, not accidents of implementation:
//!
//! - The vocabulary is ordered by **first-seen order during a single
//!   left-to-right corpus scan**, so index-based tie-breaks are reproducible.
//! - Rows and projections hold **raw term-frequency counts**, not TF-IDF
//!   weights. Simplicity is preferred over ranking quality.
//!
//! # Examples
//!
//! ```
//! use solace::vector_space::VectorSpace;
//!
//! let space = VectorSpace::build(&[
//!     "i feel sad".to_string(),
//!     "i feel anxious".to_string(),
//! ]);
//!
//! let query = space.project("feel anxious");
//! let (index, score) = space.best_match(&query).unwrap();
//!
//! assert_eq!(index, 1);
//! assert!(score > 0.5);
//! ```

use ahash::AHashMap;

/// Compute cosine similarity between two equal-length vectors.
///
/// The cosine of a zero vector against anything is defined as 0.0 for
/// determinism (mathematically it is 0/0).
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// A frozen vocabulary plus one term-frequency row per corpus document.
///
/// Immutable after construction; all query operations take `&self`.
#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    /// Vocabulary terms in first-seen order; the column order of every row.
    terms: Vec<String>,
    /// Term -> column index.
    term_index: AHashMap<String, usize>,
    /// One term-frequency row per corpus document.
    rows: Vec<Vec<f64>>,
}

impl VectorSpace {
    /// Build a vector space over a corpus of normalized documents.
    ///
    /// An empty corpus yields a well-defined empty space: no vocabulary, no
    /// rows, and [`best_match`](Self::best_match) always `None`.
    pub fn build(documents: &[String]) -> Self {
        let mut terms: Vec<String> = Vec::new();
        let mut term_index: AHashMap<String, usize> = AHashMap::new();

        // Single left-to-right scan fixes the column order.
        for document in documents {
            for term in document.split_whitespace() {
                if !term_index.contains_key(term) {
                    term_index.insert(term.to_string(), terms.len());
                    terms.push(term.to_string());
                }
            }
        }

        let rows = documents
            .iter()
            .map(|document| {
                let mut row = vec![0.0; terms.len()];
                for term in document.split_whitespace() {
                    if let Some(&column) = term_index.get(term) {
                        row[column] += 1.0;
                    }
                }
                row
            })
            .collect();

        VectorSpace {
            terms,
            term_index,
            rows,
        }
    }

    /// Project a normalized query into this space's vocabulary.
    ///
    /// Terms unseen in the corpus are dropped; a query with only
    /// out-of-vocabulary terms projects to the zero vector.
    pub fn project(&self, normalized_query: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.terms.len()];
        for term in normalized_query.split_whitespace() {
            if let Some(&column) = self.term_index.get(term) {
                vector[column] += 1.0;
            }
        }
        vector
    }

    /// Find the document row most similar to the projected query.
    ///
    /// Returns `(row index, cosine score)`, or `None` for an empty corpus.
    /// Ties resolve to the lowest index (first occurrence in scan order).
    pub fn best_match(&self, query_vector: &[f64]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (index, row) in self.rows.iter().enumerate() {
            let score = cosine_similarity(row, query_vector);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }
        best
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct terms in the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Vocabulary terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_first_seen_order() {
        let space = VectorSpace::build(&docs(&["b a c", "a d b"]));
        assert_eq!(space.terms(), &["b", "a", "c", "d"]);
        assert_eq!(space.vocabulary_size(), 4);
        assert_eq!(space.len(), 2);
    }

    #[test]
    fn test_rows_are_raw_counts() {
        let space = VectorSpace::build(&docs(&["sad sad happy"]));
        let projected = space.project("sad sad sad happy");
        assert_eq!(projected, vec![3.0, 1.0]);
    }

    #[test]
    fn test_project_out_of_vocabulary() {
        let space = VectorSpace::build(&docs(&["sad happy"]));
        assert_eq!(space.project("angry tired"), vec![0.0, 0.0]);
        assert_eq!(space.project(""), vec![0.0, 0.0]);
    }

    #[test]
    fn test_empty_corpus() {
        let space = VectorSpace::build(&[]);
        assert!(space.is_empty());
        assert_eq!(space.vocabulary_size(), 0);
        assert_eq!(space.project("anything"), Vec::<f64>::new());
        assert_eq!(space.best_match(&[]), None);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = [1.0, 2.0, 3.0];
        let score = cosine_similarity(&v, &v);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_best_match_tie_breaks_to_lowest_index() {
        // Both documents are identical, so both score 1.0 against the query.
        let space = VectorSpace::build(&docs(&["sad day", "sad day"]));
        let query = space.project("sad day");
        let (index, score) = space.best_match(&query).unwrap();
        assert_eq!(index, 0);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_row_scores_zero() {
        // A document that normalized to nothing yields an all-zero row.
        let space = VectorSpace::build(&docs(&["", "sad"]));
        let query = space.project("sad");
        let (index, score) = space.best_match(&query).unwrap();
        assert_eq!(index, 1);
        assert!(score > 0.99);
        assert_eq!(cosine_similarity(&space.project(""), &query), 0.0);
    }

    #[test]
    fn test_invariant_row_width_equals_vocabulary() {
        let space = VectorSpace::build(&docs(&["a b c", "c d"]));
        let query = space.project("a");
        assert_eq!(query.len(), space.vocabulary_size());
    }
}
