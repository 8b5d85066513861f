//! Leadsheet — a chord-progression engine.
//!
//! Compact lead-sheet notation ("C | Dm7 . | G7") is tokenized, parsed
//! into structured chords, laid out as a beat-quantized sequence of
//! harmonic events, and served to real-time queries against a moving
//! playback cursor.

pub mod engine;
pub mod notation;

pub use engine::{Engine, Sequence};
pub use notation::{ChordData, ParseError, Token, Word};
