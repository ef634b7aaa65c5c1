//! Render a bank to samples and serialize them as float32 PCM.

use std::path::{Path, PathBuf};

use crate::audio::{RenderError, SampleGrid};
use crate::wave::WaveBank;

/// Rendered superposition samples over a grid.
///
/// Samples carry whatever range the bank sums to. Many unit-amplitude
/// sources exceed the ±1.0 an audio sink expects; that headroom policy
/// belongs to the caller, so no gain normalization happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    samples: Vec<f32>,
}

impl AudioBuffer {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Sample the bank over the grid into a buffer.
///
/// Deterministic: the same bank and grid always produce bit-identical
/// samples.
pub fn render_buffer(bank: &WaveBank, grid: &SampleGrid) -> AudioBuffer {
    let mut samples = vec![0.0f32; grid.len()];
    for (n, sample) in samples.iter_mut().enumerate() {
        *sample = bank.sample(grid.time_at(n));
    }
    AudioBuffer {
        sample_rate: grid.sample_rate(),
        samples,
    }
}

/// Render the bank and write it as a mono float32 WAV artifact.
///
/// Fails fast on an invalid sample rate or non-positive duration, before
/// touching the filesystem. Write errors propagate; `finalize` runs so a
/// failed write surfaces instead of leaving a truncated header behind.
pub fn render_wav(
    bank: &WaveBank,
    sample_rate: u32,
    duration_secs: f32,
    path: &Path,
) -> Result<PathBuf, RenderError> {
    let grid = SampleGrid::new(sample_rate, duration_secs)?;
    let buffer = render_buffer(bank, &grid);
    write_wav(&buffer, path)?;
    Ok(path.to_path_buf())
}

/// Serialize an already-rendered buffer.
pub fn write_wav(buffer: &AudioBuffer, path: &Path) -> Result<(), RenderError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in buffer.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn beat_pair() -> WaveBank {
        WaveBank::from_frequencies(1.0, [240.0, 242.0]).unwrap()
    }

    #[test]
    fn test_buffer_length_is_rate_times_duration() {
        let grid = SampleGrid::new(44_100, 4.0).unwrap();
        let buffer = render_buffer(&beat_pair(), &grid);
        assert_eq!(buffer.len(), 176_400);
        assert_eq!(buffer.sample_rate(), 44_100);
        assert!((buffer.duration_secs() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let grid = SampleGrid::new(44_100, 1.0).unwrap();
        let a = render_buffer(&beat_pair(), &grid);
        let b = render_buffer(&beat_pair(), &grid);
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn test_samples_match_the_superposition() {
        let grid = SampleGrid::new(44_100, 0.01).unwrap();
        let buffer = render_buffer(&beat_pair(), &grid);
        let n = 123;
        let t = n as f32 / 44_100.0;
        let expected = (TAU * 240.0 * t).sin() + (TAU * 242.0 * t).sin();
        assert!((buffer.samples()[n] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_first_sample_is_silence_for_zero_phase() {
        let grid = SampleGrid::new(44_100, 0.001).unwrap();
        let buffer = render_buffer(&beat_pair(), &grid);
        assert_eq!(buffer.samples()[0], 0.0);
    }

    #[test]
    fn test_render_wav_rejects_bad_config_before_io() {
        let bank = beat_pair();
        // A path that could not be created anyway: the config check fires first.
        let path = Path::new("/nonexistent-dir/out.wav");
        assert!(matches!(
            render_wav(&bank, 0, 4.0, path),
            Err(RenderError::InvalidSampleRate(0))
        ));
        assert!(matches!(
            render_wav(&bank, 44_100, -1.0, path),
            Err(RenderError::NonPositiveDuration(_))
        ));
    }

    #[test]
    fn test_io_failure_propagates() {
        let bank = beat_pair();
        let path = Path::new("/nonexistent-dir/out.wav");
        assert!(matches!(
            render_wav(&bank, 44_100, 0.01, path),
            Err(RenderError::Write(_))
        ));
    }

    #[test]
    fn test_wav_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("beatviz_render_test.wav");
        let bank = beat_pair();
        render_wav(&bank, 44_100, 0.05, &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.bits_per_sample, 32);
        assert_eq!(spec.sample_format, hound::SampleFormat::Float);

        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        let grid = SampleGrid::new(44_100, 0.05).unwrap();
        assert_eq!(samples, render_buffer(&bank, &grid).samples());

        std::fs::remove_file(&path).ok();
    }
}
