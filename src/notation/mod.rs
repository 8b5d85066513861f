//! Lead-sheet notation — tokenizer and chord-symbol parser.
//!
//! The notation layer is pure: text (or a host word batch) in, tokens
//! and [`ChordData`] out. Timing and playback live in [`crate::engine`].

pub mod chord;
pub mod error;
pub mod lexer;
pub mod token;

pub use chord::{ChordData, MAX_EXTENSION_STEPS, MAX_INTERVALS};
pub use error::{ErrorKind, ParseError};
pub use token::{Token, Word};

use lexer::Tokenizer;

/// Tokenize free-form progression text.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new(text).tokenize()
}

/// Tokenize a host-delivered word batch.
pub fn tokenize_words(words: &[Word]) -> Vec<Token> {
    words.iter().map(Token::from_word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_word_paths_agree() {
        let from_text = tokenize("C | Dm7 . | G7");
        let words: Vec<Word> = ["C", "|", "Dm7", ".", "|", "G7"]
            .iter()
            .map(|w| Word::Symbol(w.to_string()))
            .collect();
        assert_eq!(from_text, tokenize_words(&words));
    }

    #[test]
    fn word_batch_surfaces_error_tokens() {
        let words = [Word::Symbol("C".into()), Word::Number(7.0)];
        assert_eq!(
            tokenize_words(&words),
            vec![Token::Chord("C".into()), Token::Error]
        );
    }
}
