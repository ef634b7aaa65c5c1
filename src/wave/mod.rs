//! Sinusoidal sources and their superposition.
//!
//! A [`WaveSource`] is a pure sine generator; a [`WaveBank`] is a validated,
//! ordered set of sources that can be summed at a single instant or over a
//! whole buffer of time points. Every consumer of a scene (plotting, scoring,
//! audio rendering) evaluates the *same* bank, which is what keeps the visual
//! and audible outputs consistent.

/// Validated set of sources plus the superposition kernels.
pub mod bank;
/// A single amplitude/frequency/phase sinusoid.
pub mod source;

pub use bank::WaveBank;
pub use source::WaveSource;

/// Errors raised when constructing sources or banks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveError {
    /// Amplitude must be strictly positive.
    NonPositiveAmplitude(f32),
    /// Frequency must be strictly positive (Hz).
    NonPositiveFrequency(f32),
    /// A bank needs at least one source.
    EmptyBank,
}

impl std::fmt::Display for WaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaveError::NonPositiveAmplitude(a) => {
                write!(f, "wave amplitude must be > 0, got {}", a)
            }
            WaveError::NonPositiveFrequency(hz) => {
                write!(f, "wave frequency must be > 0 Hz, got {}", hz)
            }
            WaveError::EmptyBank => write!(f, "a wave bank needs at least one source"),
        }
    }
}

impl std::error::Error for WaveError {}
