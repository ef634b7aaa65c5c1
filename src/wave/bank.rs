//! Superposition of multiple sources.

/*
Superposition
=============

When several sinusoids sound at once, the resulting pressure wave is simply
their sum at every instant:

    total(t) = Σᵢ  aᵢ · sin(2π fᵢ t + φᵢ)

Summation is commutative, so source order never changes the number that comes
out. Order is still preserved because scenes assign legend entries and colors
by position in the bank.

Beats
-----

Two sources at nearby frequencies (say 240 Hz and 242 Hz) drift in and out of
phase with each other. Where the peaks line up the sum swells to the combined
amplitude; half a cycle of drift later they cancel. The swell repeats at the
*difference* of the frequencies - a 2 Hz "beat" you can both see on the
plotted envelope and hear as a pulsing loudness.

Headroom
--------

Summing N unit-amplitude sources can reach ±N, far outside the ±1.0 range an
audio sink expects. That is deliberate: amplitudes are the caller's
responsibility, and the narrated renders rely on the raw sum.
*/

use crate::wave::{WaveError, WaveSource};

/// An ordered, non-empty set of sources, summed as one signal.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveBank {
    sources: Vec<WaveSource>,
}

impl WaveBank {
    /// Build a bank from explicit sources. Rejects an empty set.
    pub fn new(sources: Vec<WaveSource>) -> Result<Self, WaveError> {
        if sources.is_empty() {
            return Err(WaveError::EmptyBank);
        }
        Ok(Self { sources })
    }

    /// Build a bank of equal-amplitude, zero-phase sources, one per frequency.
    ///
    /// This is the shape every beat scene uses: `240 + 2k` Hz for k sources.
    pub fn from_frequencies(
        amplitude: f32,
        frequencies: impl IntoIterator<Item = f32>,
    ) -> Result<Self, WaveError> {
        let sources = frequencies
            .into_iter()
            .map(|hz| WaveSource::new(amplitude, hz))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sources)
    }

    pub fn sources(&self) -> &[WaveSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always false; kept for iterator-style call sites.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Sum of all sources at time `t`.
    #[inline]
    pub fn sample(&self, t: f32) -> f32 {
        self.sources.iter().map(|s| s.sample(t)).sum()
    }

    /// Sum of the absolute values of all sources at time `t`.
    ///
    /// Used by the interference score as the "everything reinforcing" bound.
    #[inline]
    pub fn sample_abs(&self, t: f32) -> f32 {
        self.sources.iter().map(|s| s.sample(t).abs()).sum()
    }

    /// Evaluate the superposition over a buffer of time points.
    #[inline]
    pub fn sample_into(&self, times: &[f32], out: &mut [f32]) {
        debug_assert_eq!(times.len(), out.len());

        for (&t, o) in times.iter().zip(out.iter_mut()) {
            *o = self.sample(t);
        }
    }

    /// Allocating convenience over [`sample_into`](Self::sample_into).
    pub fn sample_vec(&self, times: &[f32]) -> Vec<f32> {
        let mut out = vec![0.0; times.len()];
        self.sample_into(times, &mut out);
        out
    }
}
