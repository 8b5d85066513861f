//! End-to-end tests: progression text → engine → transport queries.
//!
//! These drive the public `Engine` surface the way a host would — full
//! rebuilds, time-signature changes mid-flight, ticking across bar
//! lines, and note queries against the moving cursor.

use leadsheet::notation::ErrorKind;
use leadsheet::{Engine, Word};

const SEED: u64 = 42;

/// Helper: an engine loaded with a progression.
fn engine_with(text: &str) -> Engine {
    let mut engine = Engine::new(SEED);
    engine.set_text(text).expect("progression should parse");
    engine
}

/// Helper: tick the engine once per beat, collecting the active symbol.
fn symbols_per_beat(engine: &mut Engine, beats: usize) -> Vec<String> {
    (0..beats)
        .map(|_| {
            let s = engine.current_symbol().unwrap_or("-").to_string();
            engine.tick();
            s
        })
        .collect()
}

// =============================================================================
// Full pipeline: text to timed events
// =============================================================================

#[test]
fn twelve_bar_blues_layout() {
    let mut engine = engine_with("C7 | F7 | C7 | C7 | F7 | F7 | C7 | C7 | G7 | F7 | C7 | G7");
    assert_eq!(engine.sequence().len(), 12);
    assert_eq!(engine.total_duration(), 48);
    assert_eq!(engine.current_symbol(), Some("C7"));
}

#[test]
fn mixed_hold_and_plain_bars() {
    let mut engine = engine_with("C . . | G | Am F");
    let durations: Vec<u32> = engine
        .sequence()
        .events()
        .iter()
        .map(|e| e.duration)
        .collect();
    assert_eq!(durations, vec![3, 4, 2, 2]);
    assert_eq!(engine.total_duration(), 11);

    // Beat-by-beat walk across all three bars
    let symbols = symbols_per_beat(&mut engine, 11);
    assert_eq!(
        symbols,
        ["C", "C", "C", "G", "G", "G", "G", "Am", "Am", "F", "F"]
    );
    // Wrapped around
    assert_eq!(engine.current_beat(), 0);
    assert_eq!(engine.current_symbol(), Some("C"));
}

#[test]
fn note_queries_track_the_active_chord() {
    let mut engine = engine_with("Cm7 | G7");
    assert_eq!(engine.root(), Some(0));
    assert_eq!(engine.third(), Some(3));
    assert_eq!(engine.fifth(), Some(7));

    engine.seek(4);
    assert_eq!(engine.root(), Some(7));
    assert_eq!(engine.third(), Some(11));
    assert_eq!(engine.fifth(), Some(14)); // unclamped: host folds octaves
}

#[test]
fn word_batch_interface_matches_text() {
    let words: Vec<Word> = ["Am", ".", "|", "G7"]
        .iter()
        .map(|w| Word::Symbol(w.to_string()))
        .collect();
    let mut from_words = Engine::new(SEED);
    from_words.set_words(&words).unwrap();

    let from_text = engine_with("Am . | G7");
    assert_eq!(from_words.sequence(), from_text.sequence());
}

// =============================================================================
// Rebuild atomicity
// =============================================================================

#[test]
fn failed_parse_leaves_engine_playable() {
    let mut engine = engine_with("C | G");
    engine.seek(6);

    // Structural error: leading hold
    assert_eq!(
        engine.set_text(". . C").unwrap_err().kind,
        ErrorKind::Structure
    );
    // Tokenization error: numeric word
    let bad_words = [Word::Number(4.0)];
    assert_eq!(
        engine.set_words(&bad_words).unwrap_err().kind,
        ErrorKind::Token
    );

    // Still the old progression, still at the old beat
    assert_eq!(engine.total_duration(), 8);
    assert_eq!(engine.current_beat(), 6);
    assert_eq!(engine.current_symbol(), Some("G"));
}

#[test]
fn time_signature_rebuild_uses_cached_tokens() {
    let mut engine = engine_with("C Dm G");
    assert_eq!(engine.total_duration(), 4);

    engine.set_time_signature(7).unwrap();
    let durations: Vec<u32> = engine
        .sequence()
        .events()
        .iter()
        .map(|e| e.duration)
        .collect();
    // floor(7/3) = 2 each, remainder 1 to the first chord
    assert_eq!(durations, vec![3, 2, 2]);
    assert_eq!(engine.total_duration(), 7);
}

#[test]
fn waltz_time() {
    let mut engine = Engine::new(SEED);
    engine.set_time_signature(3).unwrap();
    engine.set_text("C | G | Am | F").unwrap();
    assert_eq!(engine.total_duration(), 12);
    let symbols = symbols_per_beat(&mut engine, 6);
    assert_eq!(symbols, ["C", "C", "C", "G", "G", "G"]);
}

// =============================================================================
// Transport edges
// =============================================================================

#[test]
fn seek_negative_wraps_from_the_end() {
    let mut engine = engine_with("C . . . ."); // hold-notated, 5 beats
    assert_eq!(engine.total_duration(), 5);
    assert_eq!(engine.seek(-1), 4);
    assert_eq!(engine.seek(-5), 0);
    assert_eq!(engine.seek(12), 2);
}

#[test]
fn tick_full_cycle_returns_to_start() {
    let mut engine = engine_with("Am F | C G");
    let start = engine.seek(3);
    for _ in 0..engine.total_duration() {
        engine.tick();
    }
    assert_eq!(engine.current_beat(), start);
}

#[test]
fn empty_progression_queries_are_noops() {
    let mut engine = Engine::new(SEED);
    assert!(engine.current_event().is_none());
    assert!(engine.root().is_none());
    assert!(engine.random_note().is_none());
    assert_eq!(engine.tick(), 0);
    assert_eq!(engine.seek(9), 0);
}

#[test]
fn random_note_never_leaves_the_chord() {
    let mut engine = engine_with("G7b9");
    let chord = engine.sequence().events()[0].chord.clone();
    let tones: Vec<u8> = (0..chord.len()).filter_map(|i| chord.note(i)).collect();
    for _ in 0..200 {
        let note = engine.random_note().unwrap();
        assert!(tones.contains(&note), "{note} not in {tones:?}");
    }
}

#[test]
fn degenerate_chord_random_note_is_stable() {
    let mut engine = engine_with("Z7");
    for _ in 0..50 {
        assert_eq!(engine.random_note(), Some(0));
    }
}
