//! Manual smoke test — loads a voice, reports its configuration, synthesizes
//! a fixed sentence, and reports the resulting file size.
//!
//! Usage:
//!   piperwav-smoke [voice_path] [output_path]
//!
//! The voice path falls back to `$PIPER_VOICE`, then to
//! `./en_GB-alba-medium.onnx`; the output path defaults to
//! `./piper_test.wav`.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use piperwav::PiperVoice;

const TEST_TEXT: &str = "Hello, this is a test of the Piper text-to-speech system.";
const DEFAULT_VOICE: &str = "en_GB-alba-medium.onnx";
const DEFAULT_OUTPUT: &str = "piper_test.wav";

fn run(voice_path: &Path, output_path: &Path) -> Result<()> {
    println!("Loading voice from: {}", voice_path.display());
    let voice = PiperVoice::load(voice_path)?;
    println!("Voice loaded successfully!");
    println!("Sample rate: {}", voice.sample_rate());
    println!("Num speakers: {}", voice.config().num_speakers);

    println!("Synthesizing: {TEST_TEXT}");
    voice.synthesize_to_file(TEST_TEXT, output_path)?;
    println!("Audio saved to: {}", output_path.display());

    let size = std::fs::metadata(output_path)
        .with_context(|| format!("Cannot stat output file: {}", output_path.display()))?
        .len();
    println!("File size: {size} bytes");
    Ok(())
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let voice_path = args
        .next()
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("PIPER_VOICE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VOICE));
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    match run(&voice_path, &output_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}
