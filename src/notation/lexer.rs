//! Tokenizer for free-text progressions.
//!
//! Converts source text like `"C | Dm7 . | G7"` into a stream of
//! [`Token`]s. Tokenizing a `&str` cannot fail: every decodable input
//! has a token reading, and undecodable elements only exist on the
//! word-batch interface (see [`Token::from_word`]).

use super::token::Token;

pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    run: String,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        // A leading UTF-8 BOM decodes to a single U+FEFF char.
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Self {
            chars: source.chars().collect(),
            pos: 0,
            run: String::new(),
        }
    }

    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.skip_leading_junk();

        while !self.is_at_end() {
            let ch = self.advance();

            if !is_printable(ch) {
                // Dropped from the run without terminating it.
                continue;
            }
            if ch == '|' {
                self.flush_run(&mut tokens);
                tokens.push(Token::Bar);
            } else if ch.is_whitespace() {
                self.flush_run(&mut tokens);
            } else {
                self.run.push(ch);
            }
        }
        self.flush_run(&mut tokens);

        tokens
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_leading_junk(&mut self) {
        while !self.is_at_end() {
            let ch = self.chars[self.pos];
            if !is_printable(ch) || ch.is_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Close the pending run, emitting a token if anything accumulated.
    /// A run consisting of the single character "." is the hold marker.
    fn flush_run(&mut self, tokens: &mut Vec<Token>) {
        let text = self.run.trim();
        if text.is_empty() {
            self.run.clear();
            return;
        }
        if text == "." {
            tokens.push(Token::Hold);
        } else {
            tokens.push(Token::Chord(text.to_string()));
        }
        self.run.clear();
    }
}

/// Printable in the tokenizer's sense: an ASCII graphic character or a
/// plain space. Control characters and non-ASCII noise are dropped.
fn is_printable(ch: char) -> bool {
    ch.is_ascii_graphic() || ch == ' '
}
