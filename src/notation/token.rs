//! Token types for lead-sheet notation.

/// A single token in a progression stream.
///
/// The grammar has exactly three meaningful elements: a chord symbol,
/// the hold marker "." (extends the previous chord by one beat), and
/// the bar separator "|". `Error` marks a stream element that could not
/// be read as text at all; it aborts any sequence build that reaches it.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A chord symbol such as "C", "Dm7", "F#maj7".
    Chord(String),
    /// The hold marker ".".
    Hold,
    /// The bar separator "|".
    Bar,
    /// An element that was not decodable as text.
    Error,
}

/// One element of a host-delivered word batch.
///
/// Hosts hand progressions over as a flat list of atoms; each atom is
/// either textual or numeric. A numeric atom has no reading in the
/// chord grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Word {
    Symbol(String),
    Number(f64),
}

impl Token {
    /// Classify one host word.
    ///
    /// "." and "|" must stand alone to count as hold/bar; any other
    /// symbol is taken verbatim as a chord. Numbers surface [`Token::Error`].
    pub fn from_word(word: &Word) -> Self {
        match word {
            Word::Number(_) => Token::Error,
            Word::Symbol(s) if s == "." => Token::Hold,
            Word::Symbol(s) if s == "|" => Token::Bar,
            Word::Symbol(s) => Token::Chord(s.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_dot_is_hold() {
        assert_eq!(Token::from_word(&Word::Symbol(".".into())), Token::Hold);
    }

    #[test]
    fn word_pipe_is_bar() {
        assert_eq!(Token::from_word(&Word::Symbol("|".into())), Token::Bar);
    }

    #[test]
    fn word_symbol_is_chord() {
        assert_eq!(
            Token::from_word(&Word::Symbol("Dm7".into())),
            Token::Chord("Dm7".to_string())
        );
    }

    #[test]
    fn word_number_is_error() {
        assert_eq!(Token::from_word(&Word::Number(4.0)), Token::Error);
    }

    #[test]
    fn embedded_dot_is_not_hold() {
        // ".." or "C.7" are chord text, only a standalone "." holds
        assert_eq!(
            Token::from_word(&Word::Symbol("..".into())),
            Token::Chord("..".to_string())
        );
    }
}
