//! `piperwav` — three-argument CLI around [`PiperVoice`].
//!
//! ```text
//! piperwav <voice_path> <output_path> <text>
//! ```
//!
//! Loads the voice, synthesizes the text into a WAV file at the output path,
//! and reports `SUCCESS: …` (exit 0) or `ERROR: …` (exit 1). Every failure —
//! model load, synthesis, I/O — is surfaced through the same boundary; there
//! are no retries and no partial results.

use std::{path::Path, process::ExitCode};

use anyhow::Result;
use piperwav::PiperVoice;

fn run(voice_path: &str, output_path: &str, text: &str) -> Result<()> {
    let voice = PiperVoice::load(Path::new(voice_path))?;
    voice.synthesize_to_file(text, Path::new(output_path))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("piperwav");

    // Exactly three positional arguments; no model is touched otherwise.
    if args.len() != 4 {
        println!("Usage: {program} <voice_path> <output_path> <text>");
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2], &args[3]) {
        Ok(()) => {
            println!("SUCCESS: Audio saved to {}", args[2]);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // {:#} flattens the whole context chain onto one line.
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}
