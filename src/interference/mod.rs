//! Constructive/destructive interference scoring.

/*
Interference Score
==================

At any instant the sources of a bank are either reinforcing each other or
canceling each other out. The score quantifies which, continuously:

    total      = Σ sᵢ(t)          the actual superposition
    total_abs  = Σ |sᵢ(t)|        the best case: every source reinforcing
    score      = |total| / total_abs

  score = 1.0   perfectly constructive (all sources share a sign)
  score = 0.0   perfectly destructive (the sum cancels to zero)

A thresholded classifier ("constructive if |total| > k · total_abs") would
flip between two colors as the signal drifts across the boundary, which reads
as flicker on screen. The continuous ratio feeds straight into a color
interpolation instead, so the plotted curve fades smoothly between the
anchors.

Zero magnitude
--------------

When every source is exactly zero at `t` (all sines crossing the axis at
once, e.g. t = 0 for zero-phase banks), total_abs is 0 and the ratio is
undefined. The score resolves to 1.0 - silence is treated as fully
constructive. That is a policy choice, not a numerical accident: the common
zero crossing is where the sources are exactly in phase.
*/

use crate::wave::WaveBank;

/// The raw quantities behind a score, exposed for inspection and plotting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterferenceSample {
    /// Signed superposition `Σ s(t)`.
    pub total: f32,
    /// Magnitude bound `Σ |s(t)|`.
    pub total_abs: f32,
    /// Normalized score in `[0, 1]`.
    pub score: f32,
}

/// Classify one instant of a bank.
#[inline]
pub fn classify(bank: &WaveBank, t: f32) -> InterferenceSample {
    let total = bank.sample(t);
    let total_abs = bank.sample_abs(t);
    let score = if total_abs == 0.0 {
        1.0
    } else {
        (total.abs() / total_abs).clamp(0.0, 1.0)
    };
    InterferenceSample {
        total,
        total_abs,
        score,
    }
}

/// Normalized constructive/destructive score at time `t`.
///
/// Always in `[0, 1]`; see the module header for the zero-magnitude policy.
#[inline]
pub fn score(bank: &WaveBank, t: f32) -> f32 {
    classify(bank, t).score
}

/// Score a whole buffer of time points.
#[inline]
pub fn score_into(bank: &WaveBank, times: &[f32], out: &mut [f32]) {
    debug_assert_eq!(times.len(), out.len());

    for (&t, o) in times.iter().zip(out.iter_mut()) {
        *o = score(bank, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::{WaveBank, WaveSource};
    use std::f32::consts::PI;

    #[test]
    fn test_score_stays_in_unit_interval() {
        let bank = WaveBank::from_frequencies(1.0, [240.0, 242.0, 244.0]).unwrap();
        for n in 0..10_000 {
            let t = n as f32 / 44_100.0;
            let s = score(&bank, t);
            assert!((0.0..=1.0).contains(&s), "score {} out of range at t={}", s, t);
        }
    }

    #[test]
    fn test_single_source_is_always_constructive() {
        // One source can only interfere with itself: |x| / |x| = 1 wherever
        // it is nonzero, and the zero-magnitude policy covers the rest.
        let bank = WaveBank::from_frequencies(1.0, [240.0]).unwrap();
        for n in 0..10_000 {
            let t = n as f32 / 44_100.0;
            assert_eq!(score(&bank, t), 1.0);
        }
    }

    #[test]
    fn test_zero_magnitude_defaults_constructive() {
        let bank = WaveBank::from_frequencies(1.0, [240.0, 242.0]).unwrap();
        // Both zero-phase sources are 0 at t = 0.
        let sample = classify(&bank, 0.0);
        assert_eq!(sample.total_abs, 0.0);
        assert_eq!(sample.score, 1.0);
    }

    #[test]
    fn test_opposite_phase_scores_zero() {
        let bank = WaveBank::new(vec![
            WaveSource::new(1.0, 240.0).unwrap(),
            WaveSource::new(1.0, 240.0).unwrap().with_phase(PI),
        ])
        .unwrap();
        for n in 1..1000 {
            let t = n as f32 / 44_100.0 + 1e-4;
            let sample = classify(&bank, t);
            if sample.total_abs > 1e-3 {
                assert!(sample.score < 1e-3, "score {} at t={}", sample.score, t);
            }
        }
    }

    #[test]
    fn test_score_into_matches_scalar() {
        let bank = WaveBank::from_frequencies(1.0, [240.0, 242.0]).unwrap();
        let times: Vec<f32> = (0..128).map(|n| n as f32 / 44_100.0).collect();
        let mut out = vec![0.0; times.len()];
        score_into(&bank, &times, &mut out);
        for (&t, &s) in times.iter().zip(out.iter()) {
            assert_eq!(s, score(&bank, t));
        }
    }
}
