//! Voice handle and synthesis — the boundary with the external library.
//!
//! [`piper_rs`] does the heavy lifting (espeak-ng phonemisation and ONNX
//! inference); this module owns the loaded handle, the parsed config sidecar,
//! and the WAV encoding of the f32 samples the library returns.

use std::{
    fs::File,
    io::{BufWriter, Seek, Write},
    path::Path,
};

use anyhow::{anyhow, Context, Result};
use piper_rs::synth::PiperSpeechSynthesizer;

use crate::config::{config_path_for, VoiceConfig};

// ─────────────────────────────────────────────────────────────────────────────
// PiperVoice
// ─────────────────────────────────────────────────────────────────────────────

/// A loaded Piper voice — the opaque handle one invocation holds.
///
/// Obtained with [`PiperVoice::load`]; everything it owns is released when
/// the value is dropped.
pub struct PiperVoice {
    synth: PiperSpeechSynthesizer,
    config: VoiceConfig,
}

impl PiperVoice {
    /// Load a voice from its `.onnx` model path.
    ///
    /// The `.onnx.json` config sidecar is expected next to the model (the
    /// same layout Python's `PiperVoice.load` assumes); passing the sidecar
    /// path directly also works.
    pub fn load(model_path: &Path) -> Result<Self> {
        let config_path = config_path_for(model_path);
        let config = VoiceConfig::from_file(&config_path)?;

        // piper_rs reads the sidecar again itself; it is the source of truth
        // for inference, ours is only for reporting and the WAV header.
        let model = piper_rs::from_config_path(&config_path)
            .map_err(|e| anyhow!("Cannot load voice model {}: {e}", model_path.display()))?;
        let synth = PiperSpeechSynthesizer::new(model)
            .map_err(|e| anyhow!("Cannot initialise synthesizer: {e}"))?;

        Ok(Self { synth, config })
    }

    /// Parsed config sidecar of the loaded voice.
    pub fn config(&self) -> &VoiceConfig {
        &self.config
    }

    /// Output sample rate of this voice, in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.config.audio.sample_rate
    }

    // ── Synthesis ─────────────────────────────────────────────────────────────

    /// Synthesize `text` into mono f32 samples at [`sample_rate`](Self::sample_rate) Hz.
    pub fn synthesize(&self, text: &str) -> Result<Vec<f32>> {
        let stream = self
            .synth
            .synthesize_parallel(text.to_string(), None)
            .map_err(|e| anyhow!("Synthesis failed: {e}"))?;

        let mut samples: Vec<f32> = Vec::new();
        for chunk in stream {
            let chunk = chunk.map_err(|e| anyhow!("Synthesis failed: {e}"))?;
            samples.append(&mut chunk.into_vec());
        }
        Ok(samples)
    }

    /// Synthesize `text` into an already open handle as 16-bit PCM mono WAV.
    ///
    /// Chunks are written as the library produces them; the WAV header is
    /// finalized before returning. The counterpart of Python's
    /// `voice.synthesize_wav(text, wav_file)`.
    pub fn synthesize_wav<W: Write + Seek>(&self, text: &str, writer: W) -> Result<()> {
        let mut wav = hound::WavWriter::new(writer, wav_spec(self.sample_rate()))
            .context("Cannot write WAV header")?;

        let stream = self
            .synth
            .synthesize_parallel(text.to_string(), None)
            .map_err(|e| anyhow!("Synthesis failed: {e}"))?;
        for chunk in stream {
            let chunk = chunk.map_err(|e| anyhow!("Synthesis failed: {e}"))?;
            write_samples(&mut wav, &chunk.into_vec())?;
        }

        wav.finalize().context("WAV finalise error")?;
        Ok(())
    }

    /// Synthesize `text` and save it as a WAV file at `output_path`.
    ///
    /// The file is created before synthesis starts and closed on every exit
    /// path, success or failure.
    pub fn synthesize_to_file(&self, text: &str, output_path: &Path) -> Result<()> {
        let file = File::create(output_path)
            .with_context(|| format!("Cannot create output file: {}", output_path.display()))?;
        self.synthesize_wav(text, BufWriter::new(file))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WAV encoding
// ─────────────────────────────────────────────────────────────────────────────

/// 16-bit PCM mono — what the Python `piper` package writes. The sample rate
/// is a property of the loaded voice, never chosen here.
fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

fn write_samples<W: Write + Seek>(
    wav: &mut hound::WavWriter<W>,
    samples: &[f32],
) -> Result<()> {
    for &s in samples {
        wav.write_sample(sample_to_i16(s)).context("WAV write error")?;
    }
    Ok(())
}

/// Convert f32 `[-1.0, 1.0]` → i16 `[-32768, 32767]`, clamping out-of-range
/// samples instead of wrapping.
fn sample_to_i16(s: f32) -> i16 {
    (s * i16::MAX as f32).clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_sample_conversion() {
        assert_eq!(sample_to_i16(0.0), 0);
        assert_eq!(sample_to_i16(1.0), i16::MAX);
        assert_eq!(sample_to_i16(-1.0), -i16::MAX);
    }

    #[test]
    fn test_sample_conversion_clamps() {
        assert_eq!(sample_to_i16(2.5), i16::MAX);
        assert_eq!(sample_to_i16(-2.5), i16::MIN);
    }

    /// Write `samples` through the WAV path and hand back the encoded bytes.
    fn encode_wav(sample_rate: u32, samples: &[f32]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut wav = hound::WavWriter::new(&mut cursor, wav_spec(sample_rate)).unwrap();
        write_samples(&mut wav, samples).unwrap();
        wav.finalize().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_wav_header_carries_voice_sample_rate() {
        let bytes = encode_wav(22_050, &[0.0, 0.5, -0.5, 0.25]);
        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.sample_rate, 22_050);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(reader.len(), 4);
    }

    #[test]
    fn test_wav_samples_round_trip() {
        let bytes = encode_wav(16_000, &[0.5, -0.5]);
        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, vec![sample_to_i16(0.5), sample_to_i16(-0.5)]);
    }

    #[test]
    fn test_empty_synthesis_still_produces_a_valid_wav() {
        // Header-only file: non-empty, parseable, zero samples.
        let bytes = encode_wav(22_050, &[]);
        assert!(!bytes.is_empty());
        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.len(), 0);
    }
}
