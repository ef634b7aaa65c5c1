//! Beat-frequency scene walkthrough without a rendering engine.
//!
//! Stands in for the animation collaborator with a stdout plotter, then runs
//! the full scene flow: component curves, the score-colored interference
//! curve, the rendered audio artifact, and a cursor sweep at one domain unit
//! per second.
//!
//! Run with: cargo run --example beat_scene

use std::path::Path;

use beatviz::audio;
use beatviz::color::Rgb;
use beatviz::scene::{AudioPlayer, BeatScene, Plotter, SceneConfig};
use beatviz::{DEFAULT_DURATION_SECS, DEFAULT_SAMPLE_RATE};

/// Collaborator stand-in: samples the function and reports it on stdout.
struct StdoutPlotter;

struct SampledCurve {
    points: Vec<(f32, f32)>,
    color: Rgb,
    overrides: usize,
}

impl Plotter for StdoutPlotter {
    type Curve = SampledCurve;

    fn plot(
        &mut self,
        f: &dyn Fn(f32) -> f32,
        domain: (f32, f32),
        step: f32,
        color: Rgb,
    ) -> Self::Curve {
        let mut points = Vec::new();
        let mut x = domain.0;
        while x <= domain.1 {
            points.push((x, f(x)));
            x += step;
        }
        println!(
            "plotted {} points over [{}, {}] in #{:02X}{:02X}{:02X}",
            points.len(),
            domain.0,
            domain.1,
            (color.r * 255.0) as u8,
            (color.g * 255.0) as u8,
            (color.b * 255.0) as u8,
        );
        SampledCurve {
            points,
            color,
            overrides: 0,
        }
    }

    fn set_segment_color(&mut self, curve: &mut Self::Curve, _segment: usize, _color: Rgb) {
        curve.overrides += 1;
    }
}

struct StdoutPlayer;

impl AudioPlayer for StdoutPlayer {
    type Error = std::convert::Infallible;

    fn play(&mut self, artifact: &Path) -> Result<(), Self::Error> {
        println!("playing {}", artifact.display());
        Ok(())
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let scene = BeatScene::new(SceneConfig::default(), 2)?;
    let mut plotter = StdoutPlotter;

    let components = scene.draw_components(&mut plotter);
    println!("{} component curves", components.len());

    let scored = scene.draw_scored(&mut plotter, 200);
    println!(
        "interference curve: {} points, {} segment colors",
        scored.points.len(),
        scored.overrides
    );
    let _ = scored.color;

    // The audible render uses the 240 Hz bank; the plotted one runs at 30 Hz
    // so individual cycles stay visible.
    let audible =
        beatviz::wave::WaveBank::from_frequencies(1.0, [240.0, 242.0])?;
    let artifact = std::env::temp_dir().join("waves2beat.wav");
    audio::render_wav(&audible, DEFAULT_SAMPLE_RATE, DEFAULT_DURATION_SECS, &artifact)?;

    let mut player = StdoutPlayer;
    let mut cursor = scene.play(&mut player, &artifact)?;

    // Sweep for the length of the artifact at 60 fps.
    let dt = 1.0 / 60.0;
    let frames = (DEFAULT_DURATION_SECS / dt) as usize;
    for _ in 0..frames {
        cursor.tick(dt);
    }
    println!(
        "cursor after {}s: x = {:.3}, {} wraps",
        DEFAULT_DURATION_SECS,
        cursor.x(),
        cursor.wraps()
    );

    Ok(())
}
