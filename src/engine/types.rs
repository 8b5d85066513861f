//! Sequence data model — timed chord events.

use crate::notation::ChordData;

/// One chord occupying a span of beats.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordEvent {
    /// The symbol as written, kept for display.
    pub symbol: String,
    /// The parsed chord.
    pub chord: ChordData,
    /// Length of the span in beats.
    pub duration: u32,
}

/// An immutable, fully built progression.
///
/// A `Sequence` is only ever produced whole by the builder and swapped
/// in by the engine on success; nothing mutates it in place afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    events: Vec<ChordEvent>,
    total_duration: u32,
    time_signature: u32,
}

impl Sequence {
    pub(crate) fn new(events: Vec<ChordEvent>, time_signature: u32) -> Self {
        let total_duration = events.iter().map(|e| e.duration).sum();
        Self {
            events,
            total_duration,
            time_signature,
        }
    }

    pub fn events(&self) -> &[ChordEvent] {
        &self.events
    }

    /// Sum of all event durations, in beats.
    pub fn total_duration(&self) -> u32 {
        self.total_duration
    }

    /// The beats-per-bar numerator this sequence was built with.
    pub fn time_signature(&self) -> u32 {
        self.time_signature
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(symbol: &str, duration: u32) -> ChordEvent {
        ChordEvent {
            symbol: symbol.to_string(),
            chord: ChordData::parse(symbol),
            duration,
        }
    }

    #[test]
    fn empty_sequence() {
        let seq = Sequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq.total_duration(), 0);
    }

    #[test]
    fn total_duration_is_sum_of_events() {
        let seq = Sequence::new(vec![event("C", 2), event("G", 1), event("F", 1)], 4);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.total_duration(), 4);
        assert_eq!(seq.time_signature(), 4);
    }
}
