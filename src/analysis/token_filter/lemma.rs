//! Part-of-speech-aware lemmatization filter.
//!
//! Each token is tagged with a coarse part of speech, the tag is collapsed
//! onto a lemmatization class (verb, adjective, adverb, or the noun
//! default), and the token text is replaced with its lemma.

use super::Filter;
use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::pos::PosTagger;
use crate::analysis::token::TokenStream;

/// Filter that lemmatizes tokens according to their tagged part of speech.
#[derive(Debug, Clone, Default)]
pub struct LemmaFilter {
    tagger: PosTagger,
    lemmatizer: Lemmatizer,
}

impl LemmaFilter {
    /// Create a new lemma filter with the built-in tagger and lemmatizer.
    pub fn new() -> Self {
        LemmaFilter {
            tagger: PosTagger::new(),
            lemmatizer: Lemmatizer::new(),
        }
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered: Vec<_> = tokens
            .map(|token| {
                let pos = self.tagger.tag(&token.text).lemma_pos();
                let lemma = self.lemmatizer.lemmatize(&token.text, pos);
                token.with_text(lemma)
            })
            .collect();

        Box::new(filtered.into_iter())
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::new();
        let tokens = vec![
            Token::new("i", 0),
            Token::new("felt", 1),
            Token::new("happier", 2),
            Token::new("yesterday", 3),
        ];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "i");
        assert_eq!(result[1].text, "feel");
        assert_eq!(result[2].text, "happy");
        assert_eq!(result[3].text, "yesterday");
    }

    #[test]
    fn test_noun_default_applies_noun_rules() {
        let filter = LemmaFilter::new();
        // "thoughts" is not in the lexicon, so it is tagged as a noun and
        // loses its plural "s".
        let tokens = vec![Token::new("thoughts", 0)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();
        assert_eq!(result[0].text, "thought");
    }

    #[test]
    fn test_positions_preserved() {
        let filter = LemmaFilter::new();
        let tokens = vec![Token::new("worries", 0), Token::new("me", 1)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();
        assert_eq!(result[0].position, 0);
        assert_eq!(result[1].position, 1);
    }
}
