//! Error types for progression parsing.

use std::fmt;

/// An error that aborts a sequence build.
///
/// Carries the index of the offending token in the stream so a host can
/// point at the element that broke the progression.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub index: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A stream element was not decodable as text.
    Token,
    /// A hold marker with no chord in scope.
    Structure,
    /// A time signature the builder cannot distribute.
    TimeSignature,
}

impl ParseError {
    pub fn token(message: impl Into<String>, index: usize) -> Self {
        Self {
            message: message.into(),
            index,
            kind: ErrorKind::Token,
        }
    }

    pub fn structure(message: impl Into<String>, index: usize) -> Self {
        Self {
            message: message.into(),
            index,
            kind: ErrorKind::Structure,
        }
    }

    pub fn time_signature(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            index: 0,
            kind: ErrorKind::TimeSignature,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[token {}] {:?}: {}",
            self.index, self.kind, self.message
        )
    }
}

impl std::error::Error for ParseError {}
