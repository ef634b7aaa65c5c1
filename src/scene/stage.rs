//! Trait seams for the external rendering collaborator.
//!
//! The animation engine is consumed through two narrow capabilities: plot a
//! function over a domain and get back a drawable curve whose segments can
//! be recolored, and play a named audio artifact. Scenes stay generic over
//! these traits; the engine-side implementations live outside this crate.

use std::path::Path;

use crate::color::Rgb;

/// Plotting capability of the rendering collaborator.
pub trait Plotter {
    /// Drawable curve handle owned by the collaborator.
    type Curve;

    /// Plot `f` over `[domain.0, domain.1]` sampled every `step`, stroked in
    /// a single color.
    fn plot(&mut self, f: &dyn Fn(f32) -> f32, domain: (f32, f32), step: f32, color: Rgb)
        -> Self::Curve;

    /// Override the color of one segment of a previously plotted curve.
    fn set_segment_color(&mut self, curve: &mut Self::Curve, segment: usize, color: Rgb);
}

/// Audio playback capability of the rendering collaborator.
///
/// Playback is synchronized to wall-clock time by the collaborator; the
/// scene only hands over the artifact name.
pub trait AudioPlayer {
    type Error;

    fn play(&mut self, artifact: &Path) -> Result<(), Self::Error>;
}

/// Blanket impls so boxed collaborators can be passed around.
impl<P: Plotter + ?Sized> Plotter for Box<P> {
    type Curve = P::Curve;

    fn plot(
        &mut self,
        f: &dyn Fn(f32) -> f32,
        domain: (f32, f32),
        step: f32,
        color: Rgb,
    ) -> Self::Curve {
        (**self).plot(f, domain, step, color)
    }

    fn set_segment_color(&mut self, curve: &mut Self::Curve, segment: usize, color: Rgb) {
        (**self).set_segment_color(curve, segment, color)
    }
}

impl<A: AudioPlayer + ?Sized> AudioPlayer for Box<A> {
    type Error = A::Error;

    fn play(&mut self, artifact: &Path) -> Result<(), Self::Error> {
        (**self).play(artifact)
    }
}
