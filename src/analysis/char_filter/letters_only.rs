//! Letters-only char filter implementation.
//!
//! Lower-cases the input and removes every character that is not a lowercase
//! ASCII letter or a space. Digits, punctuation, and accented forms are all
//! stripped. This is a deliberately lossy policy: numeric and symbolic
//! content carries no signal for the downstream bag-of-words matching, so it
//! is discarded up front.

use regex::Regex;

use super::CharFilter;
use crate::error::{Result, SolaceError};

/// A char filter that lower-cases text and strips everything outside `[a-z ]`.
pub struct LettersOnlyCharFilter {
    pattern: Regex,
}

impl LettersOnlyCharFilter {
    /// Create a new letters-only char filter.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"[^ a-z]")
                .map_err(|e| SolaceError::Anyhow(anyhow::Error::from(e)))?,
        })
    }
}

impl CharFilter for LettersOnlyCharFilter {
    fn filter(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        self.pattern.replace_all(&lowered, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "letters_only"
    }
}

impl std::fmt::Debug for LettersOnlyCharFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LettersOnlyCharFilter").finish()
    }
}
