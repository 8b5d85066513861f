//! Leadsheet CLI — parse a progression, show its event table, then
//! step the transport through it printing the notes a host would play.
//!
//! The printed lines stand in for the outlet surface of the original
//! host object: chord symbol and beat on every tick, plus one note per
//! query.

use clap::{Parser, ValueEnum};
use leadsheet::Engine;

#[derive(Parser)]
#[command(author, version, about = "Chord-progression playback engine")]
struct Cli {
    /// Progression text, e.g. "C | Dm7 . | G7"
    progression: String,
    /// Beats per bar (the denominator is fixed at 4).
    #[arg(short = 't', long, default_value_t = 4)]
    time_signature: u32,
    /// Number of beats to play after printing the event table.
    #[arg(short, long, default_value_t = 0)]
    beats: u32,
    /// Which chord tone to emit per beat.
    #[arg(short, long, value_enum, default_value = "root")]
    note: NoteQuery,
    /// RNG seed for `--note random`.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Start position in beats (negative wraps from the end).
    #[arg(long, default_value_t = 0)]
    seek: i64,
}

#[derive(Clone, Copy, ValueEnum)]
enum NoteQuery {
    Root,
    Third,
    Fifth,
    Random,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut engine = Engine::new(cli.seed);
    if let Err(e) = engine
        .set_time_signature(cli.time_signature)
        .and_then(|()| engine.set_text(&cli.progression))
    {
        eprintln!("parse error: {e}");
        std::process::exit(1);
    }

    println!(
        "{} events, {} beats at {}/4",
        engine.sequence().len(),
        engine.total_duration(),
        engine.time_signature()
    );
    for event in engine.sequence().events() {
        println!(
            "  {:<8} {:>2} beat(s)  root {:>2}  intervals {:?}",
            event.symbol,
            event.duration,
            event.chord.root_offset(),
            event.chord.intervals()
        );
    }

    engine.seek(cli.seek);
    for _ in 0..cli.beats {
        let note = match cli.note {
            NoteQuery::Root => engine.root(),
            NoteQuery::Third => engine.third(),
            NoteQuery::Fifth => engine.fifth(),
            NoteQuery::Random => engine.random_note(),
        };
        let symbol = engine.current_symbol().unwrap_or("-").to_string();
        match note {
            Some(n) => println!("beat {:>3}  {:<8} note {}", engine.current_beat(), symbol, n),
            None => println!("beat {:>3}  {:<8} (no tone)", engine.current_beat(), symbol),
        }
        engine.tick();
    }
}
