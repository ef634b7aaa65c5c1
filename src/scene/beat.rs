//! Glue for the beat-frequency scenes.
//!
//! Everything numerical is delegated: the superposition comes from the
//! bank, the score from [`interference`](crate::interference), the colors
//! from the palette. This type only wires them to the collaborator traits
//! the way the narrated scenes do: component curves in their legend colors,
//! an interference curve underneath, and a per-segment recoloring of the
//! components by the interference score at the segment start.

use std::path::Path;

use crate::color::Rgb;
use crate::interference;
use crate::scene::{AudioPlayer, Cursor, Plotter, SceneConfig};
use crate::wave::{WaveBank, WaveError};

/// A beat-frequency scene over a bank of `base + 2k` Hz sources.
#[derive(Debug, Clone)]
pub struct BeatScene {
    config: SceneConfig,
    bank: WaveBank,
}

impl BeatScene {
    /// Scene with `count` sources generated from the config.
    pub fn new(config: SceneConfig, count: usize) -> Result<Self, WaveError> {
        let bank = config.bank(count)?;
        Ok(Self { config, bank })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn bank(&self) -> &WaveBank {
        &self.bank
    }

    /// Interference color for each of `segments` equal slices of the domain,
    /// scored at the segment start.
    pub fn segment_colors(&self, segments: usize) -> Vec<Rgb> {
        let (x_min, x_max) = self.config.domain();
        let width = (x_max - x_min) / segments as f32;
        (0..segments)
            .map(|i| {
                let t = x_min + i as f32 * width;
                let score = interference::score(&self.bank, t);
                self.config.palette.color_for(score)
            })
            .collect()
    }

    /// Plot each source on its own curve, in its legend color.
    pub fn draw_components<P: Plotter>(&self, plotter: &mut P) -> Vec<P::Curve> {
        self.bank
            .sources()
            .iter()
            .enumerate()
            .map(|(i, source)| {
                plotter.plot(
                    &|t| source.sample(t),
                    self.config.domain(),
                    self.config.plot_step,
                    self.config.palette.wave_color(i),
                )
            })
            .collect()
    }

    /// Plot the summed superposition in the interference color.
    pub fn draw_interference<P: Plotter>(&self, plotter: &mut P) -> P::Curve {
        plotter.plot(
            &|t| self.bank.sample(t),
            self.config.domain(),
            self.config.plot_step,
            self.config.palette.interference,
        )
    }

    /// Plot the superposition and recolor it segment by segment with the
    /// interference score.
    pub fn draw_scored<P: Plotter>(&self, plotter: &mut P, segments: usize) -> P::Curve {
        let mut curve = self.draw_interference(plotter);
        for (i, color) in self.segment_colors(segments).into_iter().enumerate() {
            plotter.set_segment_color(&mut curve, i, color);
        }
        curve
    }

    /// Start the rendered artifact and hand back the cursor that sweeps in
    /// sync with it: one domain unit per real second, wrapping at the right
    /// edge like the looping audio cue.
    pub fn play<A: AudioPlayer>(
        &self,
        player: &mut A,
        artifact: &Path,
    ) -> Result<Cursor, A::Error> {
        player.play(artifact)?;
        let (x_min, x_max) = self.config.domain();
        Ok(Cursor::new(x_min, x_max))
    }
}
