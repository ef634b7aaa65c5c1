use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::wave::WaveError;

/// A pure sinusoid: `amplitude * sin(2π * frequency * t + phase)`.
///
/// Immutable once constructed. Validation happens here so that a bank built
/// from sources never has to re-check them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSource {
    amplitude: f32,
    frequency: f32,
    phase: f32,
}

impl WaveSource {
    /// Create a source with zero phase.
    pub fn new(amplitude: f32, frequency: f32) -> Result<Self, WaveError> {
        if !(amplitude > 0.0) {
            return Err(WaveError::NonPositiveAmplitude(amplitude));
        }
        if !(frequency > 0.0) {
            return Err(WaveError::NonPositiveFrequency(frequency));
        }
        Ok(Self {
            amplitude,
            frequency,
            phase: 0.0,
        })
    }

    /// Set the phase offset in radians.
    ///
    /// Two equal-frequency sources a phase of π apart cancel exactly.
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Evaluate the sinusoid at time `t` (seconds).
    #[inline]
    pub fn sample(&self, t: f32) -> f32 {
        self.amplitude * (TAU * self.frequency * t + self.phase).sin()
    }
}
