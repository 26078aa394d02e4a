//! Coarse part-of-speech tagging for lemmatization.
//!
//! The tagger assigns each token a coarse [`PosTag`] from a closed-class
//! lexicon plus suffix heuristics. Its only contract-visible output is the
//! mapping onto a lemmatization part of speech: verb tags lemmatize as verbs,
//! adjective tags as adjectives, adverb tags as adverbs, and every other tag
//! (nouns, pronouns, determiners, prepositions, conjunctions, modals) falls
//! back to noun. The noun default is intentional and must not be "fixed":
//! the response catalogs are tuned against it.

use ahash::AHashMap;

use crate::analysis::lemmatizer::LemmaPos;

/// Coarse part-of-speech category assigned by the tagger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Nouns (also the fallback for anything unrecognized)
    Noun,
    /// Verbs, including auxiliaries
    Verb,
    /// Adjectives
    Adjective,
    /// Adverbs
    Adverb,
    /// Personal and indefinite pronouns
    Pronoun,
    /// Determiners and articles
    Determiner,
    /// Prepositions
    Preposition,
    /// Coordinating and subordinating conjunctions
    Conjunction,
    /// Modal auxiliaries ("can", "should", ...)
    Modal,
}

impl PosTag {
    /// Map this tag onto a lemmatization part of speech.
    ///
    /// Only verb, adjective, and adverb tags map to their own class; every
    /// other tag lemmatizes as a noun.
    pub fn lemma_pos(&self) -> LemmaPos {
        match self {
            PosTag::Verb => LemmaPos::Verb,
            PosTag::Adjective => LemmaPos::Adjective,
            PosTag::Adverb => LemmaPos::Adverb,
            _ => LemmaPos::Noun,
        }
    }
}

/// Closed-class words and common open-class words with a known tag.
///
/// The list is deliberately small: it covers the function words of English
/// plus the verbs and adjectives that dominate support-chat phrasing. Words
/// outside the lexicon fall through to suffix heuristics.
const LEXICON: &[(&str, PosTag)] = &[
    // Pronouns
    ("i", PosTag::Pronoun),
    ("me", PosTag::Pronoun),
    ("you", PosTag::Pronoun),
    ("he", PosTag::Pronoun),
    ("she", PosTag::Pronoun),
    ("it", PosTag::Pronoun),
    ("we", PosTag::Pronoun),
    ("they", PosTag::Pronoun),
    ("him", PosTag::Pronoun),
    ("her", PosTag::Pronoun),
    ("us", PosTag::Pronoun),
    ("them", PosTag::Pronoun),
    ("my", PosTag::Pronoun),
    ("your", PosTag::Pronoun),
    ("his", PosTag::Pronoun),
    ("its", PosTag::Pronoun),
    ("our", PosTag::Pronoun),
    ("their", PosTag::Pronoun),
    ("myself", PosTag::Pronoun),
    ("yourself", PosTag::Pronoun),
    ("someone", PosTag::Pronoun),
    ("anyone", PosTag::Pronoun),
    ("everyone", PosTag::Pronoun),
    ("something", PosTag::Pronoun),
    ("anything", PosTag::Pronoun),
    ("nothing", PosTag::Pronoun),
    ("what", PosTag::Pronoun),
    ("who", PosTag::Pronoun),
    // Determiners
    ("a", PosTag::Determiner),
    ("an", PosTag::Determiner),
    ("the", PosTag::Determiner),
    ("this", PosTag::Determiner),
    ("that", PosTag::Determiner),
    ("these", PosTag::Determiner),
    ("those", PosTag::Determiner),
    ("some", PosTag::Determiner),
    ("any", PosTag::Determiner),
    ("no", PosTag::Determiner),
    ("every", PosTag::Determiner),
    ("each", PosTag::Determiner),
    ("all", PosTag::Determiner),
    ("more", PosTag::Determiner),
    ("most", PosTag::Determiner),
    // Prepositions
    ("of", PosTag::Preposition),
    ("in", PosTag::Preposition),
    ("on", PosTag::Preposition),
    ("at", PosTag::Preposition),
    ("by", PosTag::Preposition),
    ("for", PosTag::Preposition),
    ("with", PosTag::Preposition),
    ("without", PosTag::Preposition),
    ("about", PosTag::Preposition),
    ("against", PosTag::Preposition),
    ("between", PosTag::Preposition),
    ("into", PosTag::Preposition),
    ("through", PosTag::Preposition),
    ("during", PosTag::Preposition),
    ("before", PosTag::Preposition),
    ("after", PosTag::Preposition),
    ("to", PosTag::Preposition),
    ("from", PosTag::Preposition),
    ("up", PosTag::Preposition),
    ("down", PosTag::Preposition),
    ("over", PosTag::Preposition),
    ("under", PosTag::Preposition),
    ("like", PosTag::Preposition),
    // Conjunctions
    ("and", PosTag::Conjunction),
    ("but", PosTag::Conjunction),
    ("or", PosTag::Conjunction),
    ("nor", PosTag::Conjunction),
    ("so", PosTag::Conjunction),
    ("because", PosTag::Conjunction),
    ("if", PosTag::Conjunction),
    ("while", PosTag::Conjunction),
    ("although", PosTag::Conjunction),
    ("when", PosTag::Conjunction),
    ("how", PosTag::Conjunction),
    ("why", PosTag::Conjunction),
    // Modals (tagged separately from verbs: they lemmatize as nouns,
    // matching the tagger contract)
    ("can", PosTag::Modal),
    ("could", PosTag::Modal),
    ("will", PosTag::Modal),
    ("would", PosTag::Modal),
    ("shall", PosTag::Modal),
    ("should", PosTag::Modal),
    ("may", PosTag::Modal),
    ("might", PosTag::Modal),
    ("must", PosTag::Modal),
    // Common verbs, auxiliaries first
    ("am", PosTag::Verb),
    ("is", PosTag::Verb),
    ("are", PosTag::Verb),
    ("was", PosTag::Verb),
    ("were", PosTag::Verb),
    ("be", PosTag::Verb),
    ("been", PosTag::Verb),
    ("being", PosTag::Verb),
    ("have", PosTag::Verb),
    ("has", PosTag::Verb),
    ("had", PosTag::Verb),
    ("do", PosTag::Verb),
    ("does", PosTag::Verb),
    ("did", PosTag::Verb),
    ("feel", PosTag::Verb),
    ("feels", PosTag::Verb),
    ("felt", PosTag::Verb),
    ("get", PosTag::Verb),
    ("got", PosTag::Verb),
    ("go", PosTag::Verb),
    ("goes", PosTag::Verb),
    ("went", PosTag::Verb),
    ("help", PosTag::Verb),
    ("helps", PosTag::Verb),
    ("need", PosTag::Verb),
    ("needs", PosTag::Verb),
    ("want", PosTag::Verb),
    ("wants", PosTag::Verb),
    ("know", PosTag::Verb),
    ("think", PosTag::Verb),
    ("keep", PosTag::Verb),
    ("keeps", PosTag::Verb),
    ("cope", PosTag::Verb),
    ("deal", PosTag::Verb),
    ("stop", PosTag::Verb),
    ("sleep", PosTag::Verb),
    ("cry", PosTag::Verb),
    ("cries", PosTag::Verb),
    ("worry", PosTag::Verb),
    ("worries", PosTag::Verb),
    ("suffer", PosTag::Verb),
    ("struggle", PosTag::Verb),
    ("struggles", PosTag::Verb),
    ("hurt", PosTag::Verb),
    ("hurts", PosTag::Verb),
    ("talk", PosTag::Verb),
    ("tell", PosTag::Verb),
    ("make", PosTag::Verb),
    ("makes", PosTag::Verb),
    ("take", PosTag::Verb),
    ("takes", PosTag::Verb),
    // Common adjectives in the support domain
    ("sad", PosTag::Adjective),
    ("happy", PosTag::Adjective),
    ("anxious", PosTag::Adjective),
    ("depressed", PosTag::Adjective),
    ("angry", PosTag::Adjective),
    ("lonely", PosTag::Adjective),
    ("tired", PosTag::Adjective),
    ("afraid", PosTag::Adjective),
    ("scared", PosTag::Adjective),
    ("stressed", PosTag::Adjective),
    ("worried", PosTag::Adjective),
    ("hopeless", PosTag::Adjective),
    ("worthless", PosTag::Adjective),
    ("nervous", PosTag::Adjective),
    ("overwhelmed", PosTag::Adjective),
    ("suicidal", PosTag::Adjective),
    ("mental", PosTag::Adjective),
    ("good", PosTag::Adjective),
    ("bad", PosTag::Adjective),
    ("better", PosTag::Adjective),
    ("best", PosTag::Adjective),
    ("worse", PosTag::Adjective),
    ("worst", PosTag::Adjective),
    ("happier", PosTag::Adjective),
    ("happiest", PosTag::Adjective),
    ("sadder", PosTag::Adjective),
    ("saddest", PosTag::Adjective),
    ("lonelier", PosTag::Adjective),
    ("calmer", PosTag::Adjective),
    ("alone", PosTag::Adjective),
    ("empty", PosTag::Adjective),
    ("low", PosTag::Adjective),
    // Common adverbs (adverbs have no detachment rules, so they pass
    // through lemmatization unchanged)
    ("not", PosTag::Adverb),
    ("very", PosTag::Adverb),
    ("really", PosTag::Adverb),
    ("always", PosTag::Adverb),
    ("never", PosTag::Adverb),
    ("often", PosTag::Adverb),
    ("sometimes", PosTag::Adverb),
    ("too", PosTag::Adverb),
    ("just", PosTag::Adverb),
    ("again", PosTag::Adverb),
    ("anymore", PosTag::Adverb),
];

/// A deterministic coarse part-of-speech tagger.
///
/// Looks each word up in a closed-class lexicon first; words outside the
/// lexicon are tagged by suffix heuristics, defaulting to noun. Tagging is
/// pure and context-free, so identical input always produces identical tags.
#[derive(Debug, Clone)]
pub struct PosTagger {
    lexicon: AHashMap<&'static str, PosTag>,
}

impl PosTagger {
    /// Create a new tagger with the built-in lexicon.
    pub fn new() -> Self {
        PosTagger {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    /// Tag a single word with a coarse part of speech.
    pub fn tag(&self, word: &str) -> PosTag {
        if let Some(tag) = self.lexicon.get(word) {
            return *tag;
        }
        Self::tag_by_suffix(word)
    }

    /// Suffix heuristics for words outside the lexicon.
    fn tag_by_suffix(word: &str) -> PosTag {
        if word.len() > 3 && word.ends_with("ly") {
            return PosTag::Adverb;
        }
        if word.len() > 4 && (word.ends_with("ing") || word.ends_with("ed")) {
            return PosTag::Verb;
        }
        if word.len() > 3
            && (word.ends_with("ify") || word.ends_with("ise") || word.ends_with("ize"))
        {
            return PosTag::Verb;
        }
        if word.len() > 4
            && (word.ends_with("ous")
                || word.ends_with("ful")
                || word.ends_with("ive")
                || word.ends_with("able")
                || word.ends_with("ible")
                || word.ends_with("less")
                || word.ends_with("ish"))
        {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}
