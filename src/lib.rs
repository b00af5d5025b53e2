//! # piperwav
//!
//! Thin wrapper around the [Piper](https://github.com/rhasspy/piper) voice
//! synthesizer — text in, WAV file out.
//!
//! All model loading, phonemisation and inference are delegated to the
//! [`piper_rs`] crate; this crate owns only the voice handle, the parsed
//! config sidecar, and the WAV encoding of the returned samples.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::path::Path;
//! use piperwav::PiperVoice;
//!
//! // A Piper voice is a pair of files: model.onnx + model.onnx.json
//! let voice = PiperVoice::load(Path::new("en_GB-alba-medium.onnx")).unwrap();
//! println!("Sample rate: {}", voice.sample_rate());
//!
//! voice
//!     .synthesize_to_file("Hello from Rust!", Path::new("hello.wav"))
//!     .unwrap();
//! ```
//!
//! The `piperwav` binary wraps exactly this in a three-argument CLI:
//!
//! ```text
//! piperwav <voice_path> <output_path> <text>
//! ```

pub mod config;
pub mod voice;

// ─── Re-exports for convenience ─────────────────────────────────────────────

/// A loaded voice — use [`PiperVoice::load`] to obtain one.
pub use voice::PiperVoice;

/// Parsed `<voice>.onnx.json` sidecar.
pub use config::VoiceConfig;
