use palette::{FromColor, Hsl, Srgb};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB color with channels in `[0, 1]`.
///
/// Kept as a plain value type so scene configs stay serializable and
/// independent of the color-math crate behind the interpolation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, alpha: f32) -> f32 {
    a + (b - a) * alpha
}

/// Interpolate between two colors through HSL space.
///
/// `alpha = 0` returns `a` exactly and `alpha = 1` returns `b` exactly; the
/// anchors never round-trip through the cylindrical conversion, so there is
/// no drift at the boundaries. Hue is interpolated linearly in degrees (no
/// shortest-path wrap), matching the observed gradient.
pub fn interpolate_hsl(a: Rgb, b: Rgb, alpha: f32) -> Rgb {
    if alpha <= 0.0 {
        return a;
    }
    if alpha >= 1.0 {
        return b;
    }

    let hsl_a = Hsl::from_color(Srgb::new(a.r, a.g, a.b));
    let hsl_b = Hsl::from_color(Srgb::new(b.r, b.g, b.b));

    let hue = lerp(
        hsl_a.hue.into_positive_degrees(),
        hsl_b.hue.into_positive_degrees(),
        alpha,
    );
    let saturation = lerp(hsl_a.saturation, hsl_b.saturation, alpha);
    let lightness = lerp(hsl_a.lightness, hsl_b.lightness, alpha);

    let rgb = Srgb::from_color(Hsl::new(hue, saturation, lightness));
    Rgb::new(rgb.red, rgb.green, rgb.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::from_hex(0xFC6255);
    const GREEN: Rgb = Rgb::from_hex(0x83C167);

    #[test]
    fn test_exact_at_boundaries() {
        assert_eq!(interpolate_hsl(RED, GREEN, 0.0), RED);
        assert_eq!(interpolate_hsl(RED, GREEN, 1.0), GREEN);
        // Out-of-range alphas clamp to the anchors too.
        assert_eq!(interpolate_hsl(RED, GREEN, -0.5), RED);
        assert_eq!(interpolate_hsl(RED, GREEN, 1.5), GREEN);
    }

    #[test]
    fn test_continuous_in_alpha() {
        // Nearby alphas must give nearby colors: no jumps inside (0, 1).
        let mut prev = interpolate_hsl(RED, GREEN, 0.0);
        for step in 1..=100 {
            let alpha = step as f32 / 100.0;
            let next = interpolate_hsl(RED, GREEN, alpha);
            let dist = (next.r - prev.r).abs() + (next.g - prev.g).abs() + (next.b - prev.b).abs();
            assert!(dist < 0.1, "jump of {} at alpha {}", dist, alpha);
            prev = next;
        }
    }

    #[test]
    fn test_midpoint_stays_vivid() {
        // The HSL midpoint of two saturated anchors keeps most of their
        // saturation; a channel-wise RGB midpoint of red and green would not.
        let mid = interpolate_hsl(RED, GREEN, 0.5);
        let hsl = Hsl::from_color(Srgb::new(mid.r, mid.g, mid.b));
        assert!(hsl.saturation > 0.4, "saturation {}", hsl.saturation);
    }

    #[test]
    fn test_channels_stay_normalized() {
        for step in 0..=50 {
            let c = interpolate_hsl(RED, GREEN, step as f32 / 50.0);
            for channel in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_from_hex() {
        let white = Rgb::from_hex(0xFFFFFF);
        assert_eq!(white, Rgb::new(1.0, 1.0, 1.0));
        let red = Rgb::from_hex(0xFF0000);
        assert_eq!(red, Rgb::new(1.0, 0.0, 0.0));
    }
}
