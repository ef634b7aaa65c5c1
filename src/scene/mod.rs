//! Scene-side glue: the pieces a declarative animation engine drives.
//!
//! The engine itself (scene graph, camera, text layout, playback) is an
//! external collaborator. This module owns only what the physics scenes
//! contribute: the synchronized cursor that sweeps a marker in time with the
//! rendered audio, the tagged axis-placement variants, the per-scene
//! configuration, and the trait seams the collaborator is consumed through.

/// Beat-frequency scene glue: colored superposition curves.
pub mod beat;
/// Shared per-scene configuration.
pub mod config;
/// Wall-clock-ticked marker with domain wrap.
pub mod cursor;
/// Axis placement variants.
pub mod placement;
/// Collaborator traits consumed from the rendering engine.
pub mod stage;

pub use beat::BeatScene;
pub use config::SceneConfig;
pub use cursor::Cursor;
pub use placement::{Direction, Placement};
pub use stage::{AudioPlayer, Plotter};
