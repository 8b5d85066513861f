//! Sequence builder — token stream + time signature → timed events.
//!
//! A single left-to-right pass over the tokens. The builder is a pure
//! function: it either returns a complete [`Sequence`] or an error, and
//! never touches whatever sequence is currently live. The caller swaps
//! on success, which makes rebuilds atomic by construction.

use log::debug;

use super::types::{ChordEvent, Sequence};
use crate::notation::{ChordData, ParseError, Token};

/// Build a sequence from a token stream.
///
/// Bars with hold markers keep their accumulated durations (one beat
/// per chord plus one per hold). Bars without holds distribute the time
/// signature evenly, remainder beats going to the earliest chords, so
/// every bar sums exactly to `time_signature`.
pub fn build(tokens: &[Token], time_signature: u32) -> Result<Sequence, ParseError> {
    if time_signature == 0 {
        return Err(ParseError::time_signature("time signature must be positive"));
    }

    let mut events: Vec<ChordEvent> = Vec::new();
    let mut bar_start = 0; // index of the current bar's first event
    let mut chords_in_bar = 0u32;
    let mut bar_has_holds = false;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Chord(symbol) => {
                events.push(ChordEvent {
                    symbol: symbol.clone(),
                    chord: ChordData::parse(symbol),
                    duration: 1,
                });
                chords_in_bar += 1;
            }
            Token::Hold => {
                if chords_in_bar == 0 {
                    return Err(ParseError::structure(
                        "hold marker with no chord in its bar",
                        index,
                    ));
                }
                // Extends the bar's most recent chord by one beat.
                if let Some(last) = events.last_mut() {
                    last.duration += 1;
                }
                bar_has_holds = true;
            }
            Token::Bar => {
                close_bar(
                    &mut events[bar_start..],
                    chords_in_bar,
                    bar_has_holds,
                    time_signature,
                );
                bar_start = events.len();
                chords_in_bar = 0;
                bar_has_holds = false;
            }
            Token::Error => {
                return Err(ParseError::token("element not decodable as text", index));
            }
        }
    }

    // A final bar never closed by a separator closes the same way.
    close_bar(
        &mut events[bar_start..],
        chords_in_bar,
        bar_has_holds,
        time_signature,
    );

    let sequence = Sequence::new(events, time_signature);
    debug!(
        "built sequence: {} events, {} beats",
        sequence.len(),
        sequence.total_duration()
    );
    Ok(sequence)
}

/// Close one bar. Hold-notated bars are left as accumulated; plain bars
/// get `time_signature` split across their chords with the remainder on
/// the earliest ones.
fn close_bar(bar: &mut [ChordEvent], chords: u32, has_holds: bool, time_signature: u32) {
    if chords == 0 || has_holds {
        return;
    }
    let base = time_signature / chords;
    let remainder = time_signature % chords;
    for (i, event) in bar.iter_mut().enumerate() {
        event.duration = base + u32::from((i as u32) < remainder);
    }
}
