//! Progression engine — the live sequence, its beat cursor, and the
//! note queries a host plays from.
//!
//! The [`Engine`] owns the most recently built [`Sequence`], a cache of
//! the tokens it was built from, a [`Transport`] cursor, and a seeded
//! RNG for [`Engine::random_note`]. Rebuilds are atomic: a failed parse
//! leaves the live sequence, the token cache, and the cursor exactly as
//! they were.

pub mod builder;
pub mod transport;
pub mod types;

pub use transport::Transport;
pub use types::{ChordEvent, Sequence};

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::notation::{self, ParseError, Token, Word};

/// Default beats per bar; the denominator is fixed at 4.
pub const DEFAULT_TIME_SIGNATURE: u32 = 4;

/// A single-instance, single-threaded progression engine.
pub struct Engine {
    sequence: Sequence,
    /// Last successfully built token stream, kept so a time-signature
    /// change can rebuild without re-tokenizing.
    tokens: Vec<Token>,
    time_signature: u32,
    transport: Transport,
    rng: ChaCha8Rng,
}

impl Engine {
    /// Create an engine with an empty sequence, time signature 4, and
    /// the cursor at beat zero. The seed makes `random_note` streams
    /// reproducible.
    pub fn new(seed: u64) -> Self {
        Self {
            sequence: Sequence::default(),
            tokens: Vec::new(),
            time_signature: DEFAULT_TIME_SIGNATURE,
            transport: Transport::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replace the progression from free text.
    pub fn set_text(&mut self, text: &str) -> Result<(), ParseError> {
        self.rebuild(notation::tokenize(text))
    }

    /// Replace the progression from a host word batch.
    pub fn set_words(&mut self, words: &[Word]) -> Result<(), ParseError> {
        self.rebuild(notation::tokenize_words(words))
    }

    /// Change the beats-per-bar numerator and rebuild the current
    /// progression from the cached tokens. Zero is rejected.
    pub fn set_time_signature(&mut self, time_signature: u32) -> Result<(), ParseError> {
        let sequence = builder::build(&self.tokens, time_signature)?;
        self.time_signature = time_signature;
        self.install(sequence);
        Ok(())
    }

    fn rebuild(&mut self, tokens: Vec<Token>) -> Result<(), ParseError> {
        let sequence = builder::build(&tokens, self.time_signature)?;
        self.tokens = tokens;
        self.install(sequence);
        Ok(())
    }

    /// Swap in a fully built sequence. The cursor is left where it was;
    /// it self-heals on the next lookup if the new sequence is shorter.
    fn install(&mut self, sequence: Sequence) {
        debug!(
            "sequence installed: {} events, {} beats at {}/4",
            sequence.len(),
            sequence.total_duration(),
            sequence.time_signature()
        );
        self.sequence = sequence;
    }

    /// The live sequence.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn time_signature(&self) -> u32 {
        self.time_signature
    }

    pub fn current_beat(&self) -> u32 {
        self.transport.current_beat()
    }

    pub fn total_duration(&self) -> u32 {
        self.sequence.total_duration()
    }

    /// Advance one beat; returns the new position.
    pub fn tick(&mut self) -> u32 {
        self.transport.tick(&self.sequence)
    }

    /// Jump to a beat (negative wraps from the end); returns the new
    /// position.
    pub fn seek(&mut self, beat: i64) -> u32 {
        self.transport.seek(&self.sequence, beat)
    }

    /// The event under the cursor, if any.
    pub fn current_event(&mut self) -> Option<&ChordEvent> {
        self.transport.current_event(&self.sequence)
    }

    /// Display text of the active chord.
    pub fn current_symbol(&mut self) -> Option<&str> {
        self.current_event().map(|e| e.symbol.as_str())
    }

    /// Root of the active chord, as an unclamped semitone offset.
    pub fn root(&mut self) -> Option<u8> {
        self.current_event().and_then(|e| e.chord.root())
    }

    /// Third of the active chord; `None` when the chord has fewer than
    /// two intervals.
    pub fn third(&mut self) -> Option<u8> {
        self.current_event().and_then(|e| e.chord.third())
    }

    /// Fifth of the active chord; `None` when the chord has fewer than
    /// three intervals.
    pub fn fifth(&mut self) -> Option<u8> {
        self.current_event().and_then(|e| e.chord.fifth())
    }

    /// A uniformly random tone of the active chord. A degenerate chord
    /// yields its bare root offset.
    pub fn random_note(&mut self) -> Option<u8> {
        let event = self.transport.current_event(&self.sequence)?;
        Some(event.chord.random_note(&mut self.rng))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(0)
    }
}
