//! The audio-synchronized sweep cursor.

/// A marker position advanced at real-time rate across a plotted domain.
///
/// The scene attaches the cursor when audio playback starts and calls
/// [`tick`](Cursor::tick) once per frame with the wall-clock delta. Speed is
/// chosen so one domain unit passes per real second, the same time base the
/// rendered audio plays at, which lines the visual beat crossings up with
/// the audible ones. On reaching the right edge the marker jumps back to the
/// left edge; the seam is deliberately abrupt, matching a looping audio cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    x: f32,
    domain_min: f32,
    domain_max: f32,
    speed: f32,
    wraps: u32,
}

impl Cursor {
    /// Cursor covering `[domain_min, domain_max)` at one domain unit per
    /// real second.
    pub fn new(domain_min: f32, domain_max: f32) -> Self {
        debug_assert!(domain_max > domain_min);
        Self {
            x: domain_min,
            domain_min,
            domain_max,
            speed: 1.0,
            wraps: 0,
        }
    }

    /// Cursor that completes one full domain traversal every
    /// `traversal_secs` real seconds.
    pub fn with_traversal(domain_min: f32, domain_max: f32, traversal_secs: f32) -> Self {
        debug_assert!(traversal_secs > 0.0);
        let mut cursor = Self::new(domain_min, domain_max);
        cursor.speed = (domain_max - domain_min) / traversal_secs;
        cursor
    }

    /// Current marker position.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Domain units per real second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// How many times the cursor has wrapped back to the left edge.
    pub fn wraps(&self) -> u32 {
        self.wraps
    }

    /// Advance by a wall-clock delta of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.x += self.speed * dt;
        if self.x >= self.domain_max {
            self.x = self.domain_min;
            self.wraps += 1;
        }
    }
}
