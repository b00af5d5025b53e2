//! Voice config sidecar parser.
//!
//! Every Piper voice ships as a pair of files: `<name>.onnx` (the model) and
//! `<name>.onnx.json` (a JSON sidecar describing audio format, language and
//! speaker layout). The synthesis library consumes the sidecar itself to set
//! up inference; this module parses the handful of fields the wrapper reports
//! and the WAV header needs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

// ─────────────────────────────────────────────────────────────────────────────
// <voice>.onnx.json schema (subset)
// ─────────────────────────────────────────────────────────────────────────────

/// Deserialised `<voice>.onnx.json` sidecar. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct VoiceConfig {
    /// Output audio format of the voice.
    pub audio: AudioConfig,

    /// Number of speakers baked into the model (1 for single-voice models).
    #[serde(default = "default_num_speakers")]
    pub num_speakers: u32,

    #[serde(default)]
    pub language: Option<LanguageConfig>,

    /// Dataset the voice was trained on (e.g. `"alba"`).
    #[serde(default)]
    pub dataset: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AudioConfig {
    /// Sample rate in Hz (22 050 for medium-quality voices).
    pub sample_rate: u32,

    /// Voice quality tier: `"x_low"`, `"low"`, `"medium"` or `"high"`.
    #[serde(default)]
    pub quality: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageConfig {
    /// BCP-47-ish code, e.g. `"en_GB"`.
    #[serde(default)]
    pub code: Option<String>,
}

fn default_num_speakers() -> u32 {
    1
}

impl VoiceConfig {
    /// Read and parse the sidecar at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Cannot read voice config: {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Malformed voice config: {}", path.display()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sidecar path derivation
// ─────────────────────────────────────────────────────────────────────────────

/// Config sidecar path for a voice model path.
///
/// `en_GB-alba-medium.onnx` → `en_GB-alba-medium.onnx.json`; a path that is
/// already the `.json` sidecar is returned unchanged (same derivation as
/// Python's `PiperVoice.load`).
pub fn config_path_for(model_path: &Path) -> PathBuf {
    if model_path.extension().is_some_and(|ext| ext == "json") {
        model_path.to_path_buf()
    } else {
        let mut raw = model_path.as_os_str().to_os_string();
        raw.push(".json");
        PathBuf::from(raw)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
