#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::wave::{WaveBank, WaveError};

/// Shared configuration for the interference scenes.
///
/// One value per scene replaces the per-class constant tables: the plotted
/// domain, the source amplitude, the base frequency the `base + 2k` banks
/// grow from, the plot step, and the color palette.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub palette: Palette,
    /// Left edge of the plotted domain (function-axis units).
    pub x_min: f32,
    /// Right edge of the plotted domain.
    pub x_max: f32,
    /// Amplitude of every generated source.
    pub amplitude: f32,
    /// Frequency of the first source (Hz); the k-th sits at `base + 2k`.
    pub base_frequency: f32,
    /// Sampling step for plotted curves.
    pub plot_step: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            x_min: 0.0,
            x_max: 2.0,
            amplitude: 1.0,
            // Plotted waves run at 30 Hz so individual cycles stay visible;
            // the audible renders use 240 Hz for the same beat structure.
            base_frequency: 30.0,
            plot_step: 0.005,
        }
    }
}

impl SceneConfig {
    /// Bank of `count` sources at `base + 2k` Hz, equal amplitude.
    pub fn bank(&self, count: usize) -> Result<WaveBank, WaveError> {
        WaveBank::from_frequencies(
            self.amplitude,
            (0..count).map(|k| self.base_frequency + 2.0 * k as f32),
        )
    }

    pub fn domain(&self) -> (f32, f32) {
        (self.x_min, self.x_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_frequencies_step_by_two() {
        let config = SceneConfig::default();
        let bank = config.bank(3).unwrap();
        let freqs: Vec<f32> = bank.sources().iter().map(|s| s.frequency()).collect();
        assert_eq!(freqs, vec![30.0, 32.0, 34.0]);
    }

    #[test]
    fn test_empty_bank_is_a_config_error() {
        let config = SceneConfig::default();
        assert!(config.bank(0).is_err());
    }
}
