//! beatgen - offline renderer for the beat-frequency audio artifacts.
//!
//! Run with: cargo run --bin beatgen
//!
//! Writes the full artifact set into the current directory: a single 240 Hz
//! reference tone plus the 2/3/5/20/50/101-source interference renders, all
//! mono float32 WAV at 44.1 kHz, 4 seconds. Above two sources the raw sum
//! exceeds ±1.0; the files keep the unnormalized sum on purpose.

use std::path::Path;

use beatviz::{audio, wave::WaveBank, DEFAULT_DURATION_SECS, DEFAULT_SAMPLE_RATE};

/// Artifact name and number of 240 + 2k Hz sources.
const RENDERS: &[(&str, usize)] = &[
    ("wave240.wav", 1),
    ("waves2beat.wav", 2),
    ("waves3beat.wav", 3),
    ("waves5beat.wav", 5),
    ("waves20beat.wav", 20),
    ("waves50beat.wav", 50),
    ("waves101beat.wav", 101),
];

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    for &(name, count) in RENDERS {
        let bank =
            WaveBank::from_frequencies(1.0, (0..count).map(|k| 240.0 + 2.0 * k as f32))?;
        let path = audio::render_wav(
            &bank,
            DEFAULT_SAMPLE_RATE,
            DEFAULT_DURATION_SECS,
            Path::new(name),
        )?;
        println!("wrote {} ({} sources)", path.display(), count);
    }

    Ok(())
}
