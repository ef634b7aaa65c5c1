//! Perceptual color interpolation and the named scene palette.
//!
//! Interpolating raw RGB channels between two saturated anchors passes
//! through muddy, desaturated intermediates. The colorizer converts both
//! anchors to a cylindrical hue/saturation/lightness space, interpolates
//! there, and converts back, so a red-to-green fade stays vivid the whole
//! way.

/// HSL-space interpolation between two anchors.
pub mod interp;
/// Named color roles shared by every scene.
pub mod roles;

pub use interp::{interpolate_hsl, Rgb};
pub use roles::Palette;
