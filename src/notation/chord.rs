//! Chord-symbol parsing — "Dm7", "F#maj7", "Bbdim" → root pitch class
//! plus an ordered set of semitone intervals.
//!
//! This is ordered dispatch over a fixed alphabet, not a general
//! grammar: root letter, optional accidental, one quality reading, then
//! a bounded scan for extension numbers. All arithmetic is exact
//! integer; pitch classes are modulo 12.

use log::debug;
use rand::Rng;

/// Hard cap on stored intervals. Extensions past the cap are dropped
/// without error.
pub const MAX_INTERVALS: usize = 12;

/// Default step budget for the extension scanner. Every step consumes
/// at least one character (a modifier/number group or one stray
/// character), so the scan terminates on any input; the budget is a
/// guard against symbols long enough to be garbage anyway.
pub const MAX_EXTENSION_STEPS: usize = 64;

/// A parsed chord: root pitch class (0–11) and semitone offsets from
/// the root in structural order — root, third, fifth, then extensions
/// as encountered.
///
/// An unrecognized root yields the degenerate chord: `root_offset` 0
/// and no intervals at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChordData {
    root_offset: u8,
    intervals: Vec<u8>,
}

impl ChordData {
    /// Parse a chord symbol with the default extension-step budget.
    pub fn parse(symbol: &str) -> Self {
        Self::parse_bounded(symbol, MAX_EXTENSION_STEPS)
    }

    /// Parse a chord symbol, scanning at most `max_steps` extension
    /// groups past the quality.
    pub fn parse_bounded(symbol: &str, max_steps: usize) -> Self {
        let mut chord = ChordData::default();
        let chars: Vec<char> = symbol.chars().collect();
        let mut pos = 0;

        while pos < chars.len() && !is_printable(chars[pos]) {
            pos += 1;
        }
        if pos >= chars.len() {
            debug!("empty chord symbol after trimming '{symbol}'");
            return chord;
        }

        chord.root_offset = match chars[pos] {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            other => {
                debug!("unrecognized root '{other}' in chord '{symbol}'");
                return chord;
            }
        };
        pos += 1;

        // At most one accidental on the root.
        match chars.get(pos) {
            Some('b') => {
                chord.root_offset = (chord.root_offset + 11) % 12;
                pos += 1;
            }
            Some('#') => {
                chord.root_offset = (chord.root_offset + 1) % 12;
                pos += 1;
            }
            _ => {}
        }

        // The root itself is always present once the letter is known.
        chord.intervals.push(0);

        let mut third = 4;
        let mut fifth = 7;
        if starts_with(&chars, pos, "maj") {
            // Not minor: leave "maj" for the extension scan, where it
            // reads as the major-seventh modifier ("Cmaj7").
        } else if starts_with(&chars, pos, "min") {
            third = 3;
            pos += 3;
        } else if starts_with(&chars, pos, "mi") {
            third = 3;
            pos += 2;
        } else if chars.get(pos) == Some(&'m') {
            third = 3;
            pos += 1;
        } else if starts_with(&chars, pos, "dim") {
            third = 3;
            fifth = 6;
            pos += 3;
        }
        chord.intervals.push(third);
        chord.intervals.push(fifth);

        // Extension scan: optional modifier, then one digit run.
        for _ in 0..max_steps {
            if pos >= chars.len() {
                break;
            }

            let mut modifier: i16 = 0;
            let mut consumed = false;
            if chars[pos] == 'b' {
                modifier = -1;
                pos += 1;
                consumed = true;
            } else if chars[pos] == '#' {
                modifier = 1;
                pos += 1;
                consumed = true;
            } else if starts_with(&chars, pos, "maj") {
                modifier = 1;
                pos += 3;
                consumed = true;
            } else if chars[pos] == 'M' {
                modifier = 1;
                pos += 1;
                consumed = true;
            }

            let mut number: u32 = 0;
            let mut has_digits = false;
            while pos < chars.len() && chars[pos].is_ascii_digit() {
                let digit = chars[pos] as u32 - '0' as u32;
                number = number.saturating_mul(10).saturating_add(digit);
                pos += 1;
                has_digits = true;
            }

            if has_digits {
                chord.apply_extension(number, modifier);
            } else if !consumed {
                // Stray character: skipped one at a time.
                pos += 1;
            }
        }

        chord
    }

    /// Map an interval number to semitones and record it. "5" rewrites
    /// the fifth slot in place rather than appending; unknown numbers
    /// are ignored.
    fn apply_extension(&mut self, number: u32, modifier: i16) {
        let semitones = match number {
            5 => {
                self.intervals[2] = (7 + modifier) as u8;
                return;
            }
            6 => 9 + modifier,
            7 => 10 + modifier,
            9 => 14 + modifier,
            11 => 17 + modifier,
            13 => 21 + modifier,
            _ => return,
        };
        if self.intervals.len() < MAX_INTERVALS {
            self.intervals.push(semitones as u8);
        }
    }

    /// Root pitch class, 0–11.
    pub fn root_offset(&self) -> u8 {
        self.root_offset
    }

    /// Intervals in structural order.
    pub fn intervals(&self) -> &[u8] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Absolute semitone offset of the chord tone at `index`, unclamped
    /// (can exceed 11; the host folds octaves).
    pub fn note(&self, index: usize) -> Option<u8> {
        self.intervals.get(index).map(|i| self.root_offset + i)
    }

    pub fn root(&self) -> Option<u8> {
        self.note(0)
    }

    pub fn third(&self) -> Option<u8> {
        self.note(1)
    }

    pub fn fifth(&self) -> Option<u8> {
        self.note(2)
    }

    /// A uniformly random chord tone. A degenerate chord degrades to
    /// the bare root offset rather than sampling an empty range.
    pub fn random_note<R: Rng>(&self, rng: &mut R) -> u8 {
        if self.intervals.is_empty() {
            return self.root_offset;
        }
        let index = rng.gen_range(0..self.intervals.len());
        self.root_offset + self.intervals[index]
    }
}

fn starts_with(chars: &[char], pos: usize, pattern: &str) -> bool {
    pattern
        .chars()
        .enumerate()
        .all(|(i, p)| chars.get(pos + i) == Some(&p))
}

fn is_printable(ch: char) -> bool {
    ch.is_ascii_graphic()
}
