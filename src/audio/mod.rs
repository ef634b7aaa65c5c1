//! Offline audio rendering of a wave bank.
//!
//! The renderer samples the superposition at a fixed rate over a fixed
//! duration and writes a mono, 32-bit-float PCM artifact. It is a one-shot
//! batch operation: either a complete valid file lands on disk or an error
//! propagates to the caller, never a silently truncated write.

/// Evenly spaced time points over the render window.
pub mod grid;
/// Buffer rendering and WAV serialization.
pub mod render;

pub use grid::SampleGrid;
pub use render::{render_buffer, render_wav, AudioBuffer};

/// Errors raised while configuring or writing a render.
#[derive(Debug)]
pub enum RenderError {
    /// Sample rate must be strictly positive.
    InvalidSampleRate(u32),
    /// Duration must be strictly positive seconds.
    NonPositiveDuration(f32),
    /// The artifact could not be written.
    Write(hound::Error),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidSampleRate(rate) => {
                write!(f, "sample rate must be > 0 Hz, got {}", rate)
            }
            RenderError::NonPositiveDuration(secs) => {
                write!(f, "render duration must be > 0 seconds, got {}", secs)
            }
            RenderError::Write(err) => write!(f, "failed to write audio artifact: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Write(err) => Some(err),
            _ => None,
        }
    }
}

impl From<hound::Error> for RenderError {
    fn from(err: hound::Error) -> Self {
        RenderError::Write(err)
    }
}
