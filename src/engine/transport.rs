//! Transport — the playback cursor over a built sequence.
//!
//! A single beat counter bounded by the live sequence's total duration.
//! The cursor self-heals: if a shorter sequence replaces a longer one
//! and the counter is suddenly out of range, the next event lookup
//! resets it to zero instead of failing.

use super::types::{ChordEvent, Sequence};

/// Playback position in beats.
#[derive(Debug, Default)]
pub struct Transport {
    current_beat: u32,
}

impl Transport {
    /// A transport at beat zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position in beats.
    pub fn current_beat(&self) -> u32 {
        self.current_beat
    }

    /// Reset the position to zero.
    pub fn reset(&mut self) {
        self.current_beat = 0;
    }

    /// The event whose span covers the current beat.
    ///
    /// Walks the events accumulating durations. A cursor past the end
    /// (stale after a sequence swap) resets to zero and retries once.
    /// Returns `None` only when the sequence has no events.
    pub fn current_event<'a>(&mut self, sequence: &'a Sequence) -> Option<&'a ChordEvent> {
        if sequence.is_empty() {
            return None;
        }
        if let Some(event) = Self::event_at(sequence, self.current_beat) {
            return Some(event);
        }
        self.current_beat = 0;
        Self::event_at(sequence, 0)
    }

    /// Advance one beat, wrapping to zero at the end of the sequence.
    /// Returns the new position.
    pub fn tick(&mut self, sequence: &Sequence) -> u32 {
        self.current_beat += 1;
        if self.current_beat >= sequence.total_duration() {
            self.current_beat = 0;
        }
        self.current_beat
    }

    /// Jump to an arbitrary beat, using true mathematical modulo so
    /// negative positions wrap from the end. A no-op on an empty
    /// sequence. Returns the new position.
    pub fn seek(&mut self, sequence: &Sequence, beat: i64) -> u32 {
        let duration = i64::from(sequence.total_duration());
        if duration > 0 {
            self.current_beat = (((beat % duration) + duration) % duration) as u32;
        }
        self.current_beat
    }

    fn event_at(sequence: &Sequence, beat: u32) -> Option<&ChordEvent> {
        let mut elapsed = 0;
        for event in sequence.events() {
            elapsed += event.duration;
            if beat < elapsed {
                return Some(event);
            }
        }
        None
    }
}
