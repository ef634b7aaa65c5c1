use crate::audio::RenderError;

/// Evenly spaced time points over `[0, duration)`.
///
/// The grid stores only its shape; times are produced on demand as
/// `n / sample_rate`, so the n-th grid point is identical everywhere it is
/// evaluated (plotting, scoring, audio).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGrid {
    sample_rate: u32,
    sample_count: usize,
}

impl SampleGrid {
    /// Build a grid, validating the render configuration.
    pub fn new(sample_rate: u32, duration_secs: f32) -> Result<Self, RenderError> {
        if sample_rate == 0 {
            return Err(RenderError::InvalidSampleRate(sample_rate));
        }
        if !(duration_secs > 0.0) {
            return Err(RenderError::NonPositiveDuration(duration_secs));
        }
        // f64 keeps the count exact for realistic rate * duration products.
        let sample_count = (sample_rate as f64 * duration_secs as f64).round() as usize;
        Ok(Self {
            sample_rate,
            sample_count,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.sample_count
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Step between adjacent points: `1 / sample_rate` seconds.
    pub fn step(&self) -> f32 {
        1.0 / self.sample_rate as f32
    }

    /// Time of the `n`-th point.
    #[inline]
    pub fn time_at(&self, n: usize) -> f32 {
        n as f32 / self.sample_rate as f32
    }

    /// Iterate all grid times in order.
    pub fn times(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.sample_count).map(|n| self.time_at(n))
    }
}
