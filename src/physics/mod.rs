//! Pure functions behind the non-beat visualizations.
//!
//! The diffraction scene plots the single-slit intensity envelope, the
//! autocorrelation scene overlaps a Gaussian-windowed carrier with a delayed
//! copy of itself, and the comparison scene turns light-travel times into
//! distances. All of it is plain math over f32/f64, plotted through the same
//! collaborator seam as the wave curves.

/// Speed of light in vacuum (m/s).
pub const LIGHT_SPEED_M_PER_S: f64 = 299_792_458.0;

/// Unnormalized sinc: `sin(x) / x`, with the removable singularity at zero
/// filled in.
#[inline]
pub fn sinc(x: f32) -> f32 {
    if x == 0.0 {
        1.0
    } else {
        x.sin() / x
    }
}

/// Single-slit diffraction intensity envelope `sinc²(x)`, normalized to 1 at
/// the central maximum. `x` is the reduced angle `π d sin(θ) / λ`.
#[inline]
pub fn diffraction_intensity(x: f32) -> f32 {
    let s = sinc(x);
    s * s
}

/// Gaussian-envelope carrier pulse `exp(-t²) · cos(ω_c t)`.
#[inline]
pub fn gaussian_pulse(t: f32, carrier_omega: f32) -> f32 {
    (-t * t).exp() * (carrier_omega * t).cos()
}

/// Intensity autocorrelation of `f` at delay `tau`, integrated over `times`
/// by the trapezoidal rule. `times` must be sorted ascending.
pub fn autocorrelation(f: impl Fn(f32) -> f32, tau: f32, times: &[f32]) -> f32 {
    debug_assert!(times.len() >= 2);

    let mut acc = 0.0;
    for pair in times.windows(2) {
        let (t0, t1) = (pair[0], pair[1]);
        let y0 = f(t0) * f(t0 - tau);
        let y1 = f(t1) * f(t1 - tau);
        acc += 0.5 * (y0 + y1) * (t1 - t0);
    }
    acc
}

/// Distance light covers in `secs` seconds (meters).
#[inline]
pub fn light_distance_m(secs: f64) -> f64 {
    LIGHT_SPEED_M_PER_S * secs
}
