//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that splits text on whitespace boundaries.
///
/// The canonical Solace pipeline runs this after the letters-only char
/// filter, so contractions and punctuation-adjacent forms have already been
/// collapsed into plain letter runs by the time they are split here.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("i feel very sad").collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "i");
        assert_eq!(tokens[1].text, "feel");
        assert_eq!(tokens[2].text, "very");
        assert_eq!(tokens[3].text, "sad");
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("  hello   world  ").collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("").collect();
        assert!(tokens.is_empty());

        let tokens: Vec<Token> = tokenizer.tokenize("   ").collect();
        assert!(tokens.is_empty());
    }
}
