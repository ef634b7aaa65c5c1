pub mod audio;
pub mod color;
pub mod interference;
pub mod physics;
pub mod scene; // Cursor, axis placement, collaborator seams
pub mod wave; // Sinusoidal sources and superposition

/// Sample rate of every observed audio artifact (Hz).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
/// Duration of the rendered beat artifacts (seconds).
pub const DEFAULT_DURATION_SECS: f32 = 4.0;
