//! Dictionary-and-rule lemmatizer.
//!
//! This module reduces English inflected forms to their lemmas using an
//! irregular-form exception table plus per-part-of-speech suffix detachment
//! rules, in the style of WordNet's morphy algorithm:
//!
//! 1. Look the word up in the exception table for its part of speech.
//! 2. Otherwise try the detachment rules for that part of speech in order
//!    and accept the first candidate that still looks like a word (minimum
//!    length, contains a vowel).
//! 3. Otherwise return the word unchanged.
//!
//! Adverbs have no detachment rules and pass through unchanged. The
//! algorithm is pure and deterministic, and stable on its own output:
//! lemmatizing a lemma returns it unchanged.
//!
//! # Examples
//!
//! ```
//! use solace::analysis::lemmatizer::{LemmaPos, Lemmatizer};
//!
//! let lemmatizer = Lemmatizer::new();
//!
//! assert_eq!(lemmatizer.lemmatize("felt", LemmaPos::Verb), "feel");
//! assert_eq!(lemmatizer.lemmatize("feelings", LemmaPos::Noun), "feeling");
//! assert_eq!(lemmatizer.lemmatize("happier", LemmaPos::Adjective), "happy");
//! ```

use ahash::AHashMap;

/// Lemmatization part of speech.
///
/// This is the reduced tag set the lemmatizer operates on; the tagger's
/// coarse tags collapse onto it with noun as the default class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LemmaPos {
    /// Nouns (the default class)
    Noun,
    /// Verbs
    Verb,
    /// Adjectives
    Adjective,
    /// Adverbs
    Adverb,
}

/// Irregular noun plurals.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("lives", "life"),
    ("selves", "self"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
];

/// Irregular verb forms.
const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("made", "make"),
    ("said", "say"),
    ("saw", "see"),
    ("seen", "see"),
    ("took", "take"),
    ("taken", "take"),
    ("thought", "think"),
    ("kept", "keep"),
    ("slept", "sleep"),
    ("told", "tell"),
    ("found", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("knew", "know"),
    ("known", "know"),
    ("came", "come"),
    ("ran", "run"),
    ("spoke", "speak"),
    ("felt", "feel"),
    ("dealt", "deal"),
    ("met", "meet"),
    ("lost", "lose"),
    ("left", "leave"),
    ("ate", "eat"),
    ("woke", "wake"),
];

/// Irregular comparatives and superlatives.
const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] =
    &[("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad")];

/// A suffix detachment rule: (suffix, replacement, minimum word length).
type Rule = (&'static str, &'static str, usize);

/// Noun detachment rules, tried in order.
const NOUN_RULES: &[Rule] = &[
    ("ches", "ch", 5),
    ("shes", "sh", 5),
    ("sses", "ss", 5),
    ("xes", "x", 4),
    ("zes", "z", 4),
    ("ies", "y", 5),
    ("s", "", 4),
];

/// Verb detachment rules, tried in order.
const VERB_RULES: &[Rule] = &[
    ("ches", "ch", 5),
    ("shes", "sh", 5),
    ("sses", "ss", 5),
    ("xes", "x", 4),
    ("zes", "z", 4),
    ("ies", "y", 5),
    ("ied", "y", 5),
    ("es", "e", 4),
    ("s", "", 4),
    ("ed", "", 4),
    ("ing", "", 5),
];

/// Adjective detachment rules, tried in order.
const ADJECTIVE_RULES: &[Rule] = &[
    ("iest", "y", 6),
    ("ier", "y", 5),
    ("est", "", 5),
    ("er", "", 4),
];

/// A rule-based English lemmatizer with an irregular-form exception table.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    noun_exceptions: AHashMap<&'static str, &'static str>,
    verb_exceptions: AHashMap<&'static str, &'static str>,
    adjective_exceptions: AHashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    /// Create a new lemmatizer with the built-in exception tables.
    pub fn new() -> Self {
        Lemmatizer {
            noun_exceptions: NOUN_EXCEPTIONS.iter().copied().collect(),
            verb_exceptions: VERB_EXCEPTIONS.iter().copied().collect(),
            adjective_exceptions: ADJECTIVE_EXCEPTIONS.iter().copied().collect(),
        }
    }

    /// Lemmatize a word using the given part of speech.
    pub fn lemmatize(&self, word: &str, pos: LemmaPos) -> String {
        let (exceptions, rules): (&AHashMap<_, _>, &[Rule]) = match pos {
            LemmaPos::Noun => (&self.noun_exceptions, NOUN_RULES),
            LemmaPos::Verb => (&self.verb_exceptions, VERB_RULES),
            LemmaPos::Adjective => (&self.adjective_exceptions, ADJECTIVE_RULES),
            // Adverbs have no detachment rules.
            LemmaPos::Adverb => return word.to_string(),
        };

        if let Some(lemma) = exceptions.get(word) {
            return (*lemma).to_string();
        }

        for &(suffix, replacement, min_len) in rules {
            if word.len() >= min_len && word.ends_with(suffix) {
                if let Some(candidate) =
                    Self::detach(word, suffix, replacement, pos)
                {
                    return candidate;
                }
            }
        }

        word.to_string()
    }

    /// Apply one detachment rule, returning `None` if the result does not
    /// look like a word.
    fn detach(word: &str, suffix: &str, replacement: &str, pos: LemmaPos) -> Option<String> {
        // The bare "s" rule must not fire on words like "stress", "us", "his".
        if suffix == "s" && (word.ends_with("ss") || word.ends_with("us") || word.ends_with("is"))
        {
            return None;
        }

        let stem = &word[..word.len() - suffix.len()];
        let mut candidate = format!("{stem}{replacement}");

        if candidate.len() < 2 || !candidate.chars().any(Self::is_vowel) {
            return None;
        }

        if pos == LemmaPos::Verb && (suffix == "ed" || suffix == "ing") {
            if Self::undouble(&mut candidate) {
                return Some(candidate);
            }
            Self::restore_final_e(&mut candidate);
        } else if pos == LemmaPos::Adjective && (suffix == "er" || suffix == "est") {
            Self::undouble(&mut candidate);
        }

        Some(candidate)
    }

    fn is_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
    }

    /// Collapse a doubled final consonant left behind by suffix stripping
    /// ("stopp" -> "stop", "runn" -> "run"). Only fires for consonants that
    /// English doubles before "-ed"/"-ing"/"-er"; "ll" and "ss" stay intact.
    fn undouble(candidate: &mut String) -> bool {
        let chars: Vec<char> = candidate.chars().collect();
        let n = chars.len();
        if n >= 3 && chars[n - 1] == chars[n - 2] && "bdgmnprt".contains(chars[n - 1]) {
            candidate.pop();
            return true;
        }
        false
    }

    /// Restore a dropped final "e" after stripping "-ed"/"-ing" when the stem
    /// ends consonant-vowel-consonant ("cop" -> "cope", "car" -> "care").
    fn restore_final_e(candidate: &mut String) {
        let chars: Vec<char> = candidate.chars().collect();
        let n = chars.len();
        if n >= 3
            && !Self::is_vowel(chars[n - 3])
            && matches!(chars[n - 2], 'a' | 'e' | 'i' | 'o' | 'u')
            && !Self::is_vowel(chars[n - 1])
            && !matches!(chars[n - 1], 'w' | 'x')
        {
            candidate.push('e');
        }
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}
